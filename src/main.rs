use alloy_provider::ProviderBuilder;
use ccip_usdc_ops::cli::Cli;
use ccip_usdc_ops::progress::Spinner;
use ccip_usdc_ops::tasks::TaskContext;
use ccip_usdc_ops::{config, parse_network, AlloyBackend, ArtifactStore, DeploymentStore, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("❌ {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let chain = parse_network(&cli.network)?;

    let signer = config::private_key_signer()?;
    let deployer_address = signer.address();
    let rpc_url = match cli.rpc_url {
        Some(url) => url,
        None => config::rpc_url(chain)?,
    };

    let provider = ProviderBuilder::new().wallet(signer).connect_http(rpc_url);
    let backend = AlloyBackend::new(
        provider,
        deployer_address,
        ArtifactStore::new(&cli.artifacts_path),
    );
    let store = DeploymentStore::new(&cli.deployments_path);
    let progress = Spinner::new();

    let ctx = TaskContext::builder()
        .chain(chain)
        .deployer(&backend)
        .configurator(&backend)
        .store(&store)
        .progress(&progress)
        .build();

    cli.command.run(&ctx).await
}
