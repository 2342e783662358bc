use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lineage::{api, archive::Archive, views};

#[derive(Parser)]
#[command(name = "lineage")]
#[command(about = "Genealogical archive server with table, tree, and timeline views")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the archive server
    Serve {
        /// Port for HTTP API
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Path to the family archive document
        #[arg(short, long, default_value = "data/family.json")]
        data: PathBuf,
    },
    /// Load the archive document and report what it contains
    Check {
        /// Path to the family archive document
        #[arg(short, long, default_value = "data/family.json")]
        data: PathBuf,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "lineage=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn serve(port: u16, data: PathBuf) -> anyhow::Result<()> {
    let archive = Archive::load(&data)?;
    tracing::info!("Loaded {} people from {}", archive.len(), data.display());

    let app = api::create_router(Arc::new(archive));

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    tracing::info!("Lineage server listening on http://127.0.0.1:{}", port);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Some(Commands::Serve { port, data }) => serve(port, data).await?,
        Some(Commands::Check { data }) => {
            let archive = Archive::load(&data)?;
            let tree = views::build_tree(&archive);
            println!(
                "{}: {} people, {} generations, {} parent-child edges",
                data.display(),
                archive.len(),
                tree.generations.len(),
                tree.edges.len()
            );
        }
        None => serve(3000, PathBuf::from("data/family.json")).await?,
    }

    Ok(())
}
