//! Production implementations of the on-chain operation traits.
//!
//! [`AlloyBackend`] implements both [`crate::ContractDeployer`] and
//! [`crate::ContractConfigurator`] on top of an Alloy provider. Test fakes
//! for the same traits live in [`crate::testing`].

mod alloy;

pub use alloy::AlloyBackend;
