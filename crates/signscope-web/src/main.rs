use clap::Parser;
use signscope_web::cli::Cli;
use signscope_web::server::run_server;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);

    let config = cli.into_config();
    let addr: SocketAddr = format!("{}:{}", config.address, config.port).parse()?;

    println!();
    println!("  Signscope: traffic-sign classifier");
    println!();
    println!("  Artifact: {}", config.model_path.display());
    println!("  Source:   {}", config.model_url);
    println!();
    println!("  Open http://{} in your browser", addr);
    println!();

    run_server(config, addr).await?;

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "signscope_web=debug,signscope_model=debug,tower_http=debug"
    } else {
        "signscope_web=info,signscope_model=info,tower_http=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
