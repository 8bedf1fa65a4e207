//! Deployment record store
//!
//! Persists deployed contract addresses to per-network JSON files under a
//! deployments directory, and reads them back so later configure/transfer
//! invocations can run without repeating addresses on the command line.
//!
//! One file per network holds the sender (`<network>.json`, key
//! `transferUsdc`); the receiver gets its own file
//! (`<network>-CrossChainReceiver.json`, key `crossChainReceiver`). Records
//! are overwritten wholesale, never mutated in place, so re-running a deploy
//! is always safe. Files are not locked; concurrent invocations against the
//! same network are last-writer-wins.

use std::fmt::{self, Display};
use std::fs;
use std::path::{Path, PathBuf};

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{OpsError, Result};

/// Which of the two contract kinds a record belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContractRole {
    /// The CrossChainReceiver contract on the destination network
    Receiver,
    /// The TransferUSDC contract on the source network
    Sender,
}

impl ContractRole {
    /// The JSON key the address is stored under.
    pub fn record_key(&self) -> &'static str {
        match self {
            ContractRole::Receiver => "crossChainReceiver",
            ContractRole::Sender => "transferUsdc",
        }
    }

    /// The contract name used in operator-facing output.
    pub fn contract_name(&self) -> &'static str {
        match self {
            ContractRole::Receiver => "CrossChainReceiver",
            ContractRole::Sender => "TransferUSDC",
        }
    }

    /// The subcommand that deploys this contract, for error hints.
    pub fn deploy_command(&self) -> &'static str {
        match self {
            ContractRole::Receiver => "deploy-receiver",
            ContractRole::Sender => "deploy-sender",
        }
    }

    fn file_stem(&self, network: &str) -> String {
        match self {
            ContractRole::Receiver => format!("{network}-CrossChainReceiver"),
            ContractRole::Sender => network.to_string(),
        }
    }
}

impl Display for ContractRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.contract_name())
    }
}

/// One persisted deployment record.
///
/// Field order is fixed so repeated saves of the same record are
/// byte-identical on disk.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentRecord {
    pub network: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_usdc: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_chain_receiver: Option<Address>,
}

impl DeploymentRecord {
    /// Builds the record for a (network, role, address) triple.
    pub fn new(network: &str, role: ContractRole, address: Address) -> Self {
        let mut record = DeploymentRecord {
            network: network.to_string(),
            transfer_usdc: None,
            cross_chain_receiver: None,
        };
        match role {
            ContractRole::Sender => record.transfer_usdc = Some(address),
            ContractRole::Receiver => record.cross_chain_receiver = Some(address),
        }
        record
    }

    fn address_for(&self, role: ContractRole) -> Option<Address> {
        match role {
            ContractRole::Sender => self.transfer_usdc,
            ContractRole::Receiver => self.cross_chain_receiver,
        }
    }
}

/// Reads and writes per-network deployment record files.
#[derive(Debug, Clone)]
pub struct DeploymentStore {
    dir: PathBuf,
}

impl DeploymentStore {
    /// Creates a store rooted at the given deployments directory.
    ///
    /// The directory itself is created lazily on the first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The file a record for this (network, role) lives in.
    pub fn record_path(&self, network: &str, role: ContractRole) -> PathBuf {
        self.dir.join(format!("{}.json", role.file_stem(network)))
    }

    /// Persists a deployment record, overwriting any previous file.
    ///
    /// Creates the deployments directory if it does not exist yet. Returns
    /// the path written so callers can report it.
    pub fn save(&self, network: &str, role: ContractRole, address: Address) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir).map_err(|e| OpsError::Persistence {
            reason: format!("could not create {}: {e}", self.dir.display()),
        })?;

        let path = self.record_path(network, role);
        let record = DeploymentRecord::new(network, role, address);
        let json = serde_json::to_string(&record)?;
        fs::write(&path, json).map_err(|e| OpsError::Persistence {
            reason: format!("could not write {}: {e}", path.display()),
        })?;

        info!(
            network = network,
            role = %role,
            address = %address,
            path = %path.display(),
            event = "deployment_record_saved"
        );
        Ok(path)
    }

    /// Loads a previously deployed address for this (network, role).
    ///
    /// Fails with [`OpsError::MissingAddress`] when the record file or the
    /// role's key is absent, carrying a hint pointing at the deploy command
    /// that would create it.
    pub fn load(&self, network: &str, role: ContractRole) -> Result<Address> {
        let path = self.record_path(network, role);
        debug!(
            network = network,
            role = %role,
            path = %path.display(),
            event = "deployment_record_lookup"
        );

        let missing = || OpsError::MissingAddress {
            role: role.contract_name(),
            hint: format!(
                "Did you run the \"{}\" command? Was the \"{}\" file generated? \
                 You can also provide the address explicitly via the corresponding flag.",
                role.deploy_command(),
                path.display()
            ),
        };

        let contents = fs::read_to_string(&path).map_err(|_| missing())?;
        let record: DeploymentRecord = serde_json::from_str(&contents)?;
        record.address_for(role).ok_or_else(missing)
    }
}

impl AsRef<Path> for DeploymentStore {
    fn as_ref(&self) -> &Path {
        &self.dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;
    use tempfile::TempDir;

    const ADDR: Address = address!("742d35Cc6634C0532925a3b844Bc9e7595f8fA0d");

    #[test]
    fn save_then_load_roundtrips() {
        let dir = TempDir::new().unwrap();
        let store = DeploymentStore::new(dir.path());

        store.save("sepolia", ContractRole::Sender, ADDR).unwrap();
        let loaded = store.load("sepolia", ContractRole::Sender).unwrap();
        assert_eq!(loaded, ADDR);
    }

    #[test]
    fn roles_use_separate_files_and_keys() {
        let dir = TempDir::new().unwrap();
        let store = DeploymentStore::new(dir.path());

        let sender_path = store.save("sepolia", ContractRole::Sender, ADDR).unwrap();
        let receiver_path = store
            .save("sepolia", ContractRole::Receiver, ADDR)
            .unwrap();

        assert_eq!(sender_path.file_name().unwrap(), "sepolia.json");
        assert_eq!(
            receiver_path.file_name().unwrap(),
            "sepolia-CrossChainReceiver.json"
        );

        let sender_json = std::fs::read_to_string(&sender_path).unwrap();
        insta::assert_snapshot!(
            sender_json,
            @r#"{"network":"sepolia","transferUsdc":"0x742d35cc6634c0532925a3b844bc9e7595f8fa0d"}"#
        );
        let receiver_json = std::fs::read_to_string(&receiver_path).unwrap();
        insta::assert_snapshot!(
            receiver_json,
            @r#"{"network":"sepolia","crossChainReceiver":"0x742d35cc6634c0532925a3b844bc9e7595f8fa0d"}"#
        );
    }

    #[test]
    fn repeated_saves_are_byte_identical() {
        let dir = TempDir::new().unwrap();
        let store = DeploymentStore::new(dir.path());

        let path = store.save("fuji", ContractRole::Sender, ADDR).unwrap();
        let first = std::fs::read(&path).unwrap();
        store.save("fuji", ContractRole::Sender, ADDR).unwrap();
        let second = std::fs::read(&path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn load_missing_record_fails_with_hint() {
        let dir = TempDir::new().unwrap();
        let store = DeploymentStore::new(dir.path());

        let err = store.load("sepolia", ContractRole::Sender).unwrap_err();
        match err {
            OpsError::MissingAddress { role, hint } => {
                assert_eq!(role, "TransferUSDC");
                assert!(hint.contains("deploy-sender"));
                assert!(hint.contains("sepolia.json"));
            }
            other => panic!("expected MissingAddress, got {other}"),
        }
    }

    #[test]
    fn load_record_without_role_key_fails() {
        let dir = TempDir::new().unwrap();
        let store = DeploymentStore::new(dir.path());

        // A receiver record does not satisfy a sender lookup for the same
        // network even if someone copies it over the sender file name.
        let path = store.record_path("sepolia", ContractRole::Sender);
        std::fs::create_dir_all(dir.path()).unwrap();
        std::fs::write(
            &path,
            r#"{"network":"sepolia","crossChainReceiver":"0x742d35cc6634c0532925a3b844bc9e7595f8fa0d"}"#,
        )
        .unwrap();

        let err = store.load("sepolia", ContractRole::Sender).unwrap_err();
        assert!(matches!(err, OpsError::MissingAddress { .. }));
    }

    #[test]
    fn save_into_unwritable_dir_fails_with_persistence() {
        let dir = TempDir::new().unwrap();
        // Using an existing regular file as the deployments "directory"
        // forces create_dir_all to fail.
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"").unwrap();
        let store = DeploymentStore::new(&blocker);

        let err = store
            .save("sepolia", ContractRole::Sender, ADDR)
            .unwrap_err();
        assert!(matches!(err, OpsError::Persistence { .. }));
    }
}
