use alloy_chains::NamedChain;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpsError {
    #[error("Network not supported by CCIP: {chain}")]
    UnknownNetwork { chain: String },

    #[error("{role} address is undefined. {hint}")]
    MissingAddress { role: &'static str, hint: String },

    #[error("Deployment failed: {reason}")]
    Deployment { reason: String },

    #[error("Configuration call failed: {reason}")]
    Configuration { reason: String },

    #[error("Failed to persist deployment record: {reason}")]
    Persistence { reason: String },

    #[error("Failed to parse contract artifact: {reason}")]
    Artifact { reason: String },

    #[error("Signer setup failed: {reason}")]
    Signer { reason: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("RPC error: {0}")]
    Rpc(#[from] alloy_json_rpc::RpcError<alloy_transport::TransportErrorKind>),

    #[error("Contract call failed: {0}")]
    Contract(#[from] alloy_contract::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Hex conversion error: {0}")]
    Hex(#[from] alloy_primitives::hex::FromHexError),
}

impl OpsError {
    /// Error for a chain that has no CCIP routing entry.
    pub fn unknown_network(chain: NamedChain) -> Self {
        OpsError::UnknownNetwork {
            chain: chain.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, OpsError>;
