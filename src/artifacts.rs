//! Compiled contract artifact loading
//!
//! The contracts themselves are compiled outside this tool; deployment reads
//! their creation bytecode from compilation artifact JSON files in an
//! artifacts directory (one `<ContractName>.json` per contract).
//!
//! Both the Hardhat layout (`"bytecode": "0x..."`) and the Foundry layout
//! (`"bytecode": {"object": "0x..."}`) are accepted.

use std::fs;
use std::path::PathBuf;

use alloy_primitives::{hex, Bytes};
use serde_json::Value;
use tracing::debug;

use crate::{OpsError, Result};

/// Reads creation bytecode out of compilation artifacts.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    /// Creates a store rooted at the given artifacts directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Loads the creation bytecode for a contract by name.
    pub fn creation_code(&self, contract_name: &str) -> Result<Bytes> {
        let path = self.dir.join(format!("{contract_name}.json"));
        let contents = fs::read_to_string(&path).map_err(|e| OpsError::Artifact {
            reason: format!("could not read {}: {e}", path.display()),
        })?;
        let artifact: Value = serde_json::from_str(&contents)?;

        let bytecode_hex = match &artifact["bytecode"] {
            Value::String(s) => s.as_str(),
            Value::Object(obj) => obj.get("object").and_then(Value::as_str).ok_or_else(|| {
                OpsError::Artifact {
                    reason: format!("{}: bytecode.object is not a string", path.display()),
                }
            })?,
            _ => {
                return Err(OpsError::Artifact {
                    reason: format!("{}: no bytecode field", path.display()),
                })
            }
        };

        let code = hex::decode(bytecode_hex.trim_start_matches("0x"))?;
        if code.is_empty() {
            return Err(OpsError::Artifact {
                reason: format!("{}: empty creation bytecode", path.display()),
            });
        }

        debug!(
            contract = contract_name,
            bytecode_length_bytes = code.len(),
            event = "artifact_bytecode_loaded"
        );
        Ok(Bytes::from(code))
    }
}
