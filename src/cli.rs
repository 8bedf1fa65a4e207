//! Definitions of CLI arguments and commands for the orchestrator

use std::path::PathBuf;

use alloy_primitives::{Address, U256};
use clap::{Args, Parser, Subcommand};
use url::Url;

use crate::chain::parse_network;
use crate::tasks::{
    deploy_receiver, deploy_sender, prepare_receiver, prepare_sender, transfer, TaskContext,
};
use crate::Result;

#[derive(Parser)]
#[command(about = "Deploys and configures cross-chain USDC transfer contracts over CCIP")]
pub struct Cli {
    /// Network this invocation targets (e.g. sepolia, arbitrum-sepolia)
    #[arg(short, long, env = "CCIP_NETWORK")]
    pub network: String,

    /// RPC URL override; defaults to the <NETWORK>_RPC_URL environment variable
    #[arg(long)]
    pub rpc_url: Option<Url>,

    /// Directory holding the per-network deployment record files
    #[arg(long, default_value = "deployments")]
    pub deployments_path: PathBuf,

    /// Directory holding the compiled contract artifacts
    #[arg(long, default_value = "artifacts")]
    pub artifacts_path: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Deploy the CrossChainReceiver smart contract
    DeployReceiver(DeployReceiverArgs),
    /// Deploy the TransferUSDC smart contract
    DeploySender(DeploySenderArgs),
    /// Allowlist a source chain and sender on the CrossChainReceiver
    PrepareReceiver(PrepareReceiverArgs),
    /// Allowlist a destination chain on the TransferUSDC contract
    PrepareSender(PrepareSenderArgs),
    /// Call the transferUsdc function of the TransferUSDC contract
    Transfer(TransferArgs),
}

impl Command {
    pub async fn run(self, ctx: &TaskContext<'_>) -> Result<()> {
        match self {
            Command::DeployReceiver(args) => {
                deploy_receiver(ctx, args.router).await?;
            }
            Command::DeploySender(args) => {
                deploy_sender(ctx, args.router, args.link, args.usdc).await?;
            }
            Command::PrepareReceiver(args) => {
                prepare_receiver(ctx, args.source_chain_selector, args.sender, args.receiver)
                    .await?;
            }
            Command::PrepareSender(args) => {
                let receiver_network = parse_network(&args.receiver_network)?;
                prepare_sender(ctx, receiver_network, args.transfer_usdc).await?;
            }
            Command::Transfer(args) => {
                let receiver_network = parse_network(&args.receiver_network)?;
                transfer(
                    ctx,
                    receiver_network,
                    args.receiver,
                    args.amount,
                    args.gas_limit,
                    args.transfer_usdc,
                )
                .await?;
            }
        }
        Ok(())
    }
}

#[derive(Args)]
pub struct DeployReceiverArgs {
    /// Address of the CCIP Router contract; defaults to the network config
    #[arg(long)]
    pub router: Option<Address>,
}

#[derive(Args)]
pub struct DeploySenderArgs {
    /// Address of the CCIP Router contract; defaults to the network config
    #[arg(long)]
    pub router: Option<Address>,

    /// Address of the LINK token; defaults to the network config
    #[arg(long)]
    pub link: Option<Address>,

    /// Address of the USDC token; defaults to the network config
    #[arg(long)]
    pub usdc: Option<Address>,
}

#[derive(Args)]
pub struct PrepareReceiverArgs {
    /// Chain selector of the source network to allow
    #[arg(long)]
    pub source_chain_selector: u64,

    /// Address of the TransferUSDC contract on the source network
    #[arg(long)]
    pub sender: Address,

    /// Address of the CrossChainReceiver contract; defaults to the
    /// deployment record for the active network
    #[arg(long)]
    pub receiver: Option<Address>,
}

#[derive(Args)]
pub struct PrepareSenderArgs {
    /// The network that will receive the tokens
    #[arg(long)]
    pub receiver_network: String,

    /// Address of the TransferUSDC contract; defaults to the deployment
    /// record for the active network
    #[arg(long)]
    pub transfer_usdc: Option<Address>,
}

#[derive(Args)]
pub struct TransferArgs {
    /// The network that will receive the tokens
    #[arg(long)]
    pub receiver_network: String,

    /// Address of the EOA receiving the tokens
    #[arg(long)]
    pub receiver: Address,

    /// Amount in USDC base units
    #[arg(long)]
    pub amount: U256,

    /// Gas limit for the receive-side execution
    #[arg(long, default_value_t = 0)]
    pub gas_limit: u64,

    /// Address of the TransferUSDC contract; defaults to the deployment
    /// record for the active network
    #[arg(long)]
    pub transfer_usdc: Option<Address>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn transfer_flags_parse() {
        let cli = Cli::parse_from([
            "ccip-usdc-ops",
            "--network",
            "sepolia",
            "transfer",
            "--receiver-network",
            "arbitrum-sepolia",
            "--receiver",
            "0x742d35Cc6634C0532925a3b844Bc9e7595f8fA0d",
            "--amount",
            "10000",
            "--gas-limit",
            "62810",
        ]);
        match cli.command {
            Command::Transfer(args) => {
                assert_eq!(args.amount, U256::from(10000u64));
                assert_eq!(args.gas_limit, 62810);
                assert!(args.transfer_usdc.is_none());
            }
            _ => panic!("expected transfer command"),
        }
    }
}
