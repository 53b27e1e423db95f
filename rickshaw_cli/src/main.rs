use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::assign::AssignArgs;
use crate::generate::GenerateArgs;

mod assign;
mod generate;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a demo passenger/ride document
    #[command(visible_alias = "g")]
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },
    /// Assign rides to passengers from a demo document
    Assign {
        #[command(flatten)]
        args: AssignArgs,
    },
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Commands::Generate { args } => generate::run(args),
        Commands::Assign { args } => assign::run(args).await,
    }
}
