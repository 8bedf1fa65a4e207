//! Orchestration driver
//!
//! One function per named operation: `deploy-receiver`, `deploy-sender`,
//! `prepare-receiver`, `prepare-sender`, and `transfer`. Every task moves
//! through the same lifecycle: resolve inputs (explicit flags merged with
//! chain-config and record-store fallbacks, failing fast before any chain
//! interaction), submit and await exactly one transaction at a time, persist
//! the result best-effort, then print a success line.
//!
//! Tasks receive an explicit [`TaskContext`] instead of reading ambient
//! process state; everything that touches a chain or the filesystem is
//! injected, so the driver is testable against the fakes in
//! [`crate::testing`].

mod deploy;
mod prepare;
mod transfer;

use std::future::Future;

use alloy_chains::NamedChain;
use alloy_primitives::Address;
use bon::Builder;
use tracing::{debug, warn};

pub use deploy::{deploy_receiver, deploy_sender};
pub use prepare::{prepare_receiver, prepare_sender};
pub use transfer::transfer;

use crate::progress::ProgressReporter;
use crate::records::{ContractRole, DeploymentStore};
use crate::traits::{ContractConfigurator, ContractDeployer};
use crate::Result;

/// Everything a task needs, passed explicitly.
#[derive(Builder)]
pub struct TaskContext<'a> {
    /// The network this invocation targets
    pub chain: NamedChain,
    pub deployer: &'a dyn ContractDeployer,
    pub configurator: &'a dyn ContractConfigurator,
    pub store: &'a DeploymentStore,
    pub progress: &'a dyn ProgressReporter,
}

impl TaskContext<'_> {
    /// The network name used in output and record file names.
    pub fn network_name(&self) -> String {
        self.chain.to_string()
    }
}

/// Runs a blocking chain operation bracketed by progress reporting.
///
/// The reporter is stopped on both success and failure so the terminal is
/// never left spinning over an error message.
pub(crate) async fn with_progress<T>(
    progress: &dyn ProgressReporter,
    message: String,
    operation: impl Future<Output = Result<T>>,
) -> Result<T> {
    progress.start(&message);
    let result = operation.await;
    progress.stop();
    result
}

/// Persists a deployment record, downgrading failure to a warning.
///
/// The address was already printed when the deployment confirmed, so a
/// write failure must not fail the task: the on-chain effect succeeded and
/// the operator can save the address manually.
pub(crate) fn persist_record(ctx: &TaskContext<'_>, role: ContractRole, address: Address) {
    let network = ctx.network_name();
    match ctx.store.save(&network, role, address) {
        Ok(path) => {
            debug!(
                path = %path.display(),
                event = "deployment_record_persisted"
            );
        }
        Err(e) => {
            warn!(
                network = network,
                role = %role,
                address = %address,
                error = %e,
                event = "deployment_record_save_failed"
            );
            println!(
                "ℹ️  Saving the {role} address to {} failed, please save it manually \
                 from the log above, you will need it for further tasks. ({e})",
                ctx.store.record_path(&network, role).display()
            );
        }
    }
}
