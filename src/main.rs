use std::process::ExitCode;

use au3lsp::{create_service, describe};
use clap::Parser;
use tower_lsp::Server;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "au3lsp", version)]
#[command(about = "Language server for the AutoIt WinAPI UDFs")]
struct Cli {
    /// Communicate over stdin/stdout (the default)
    #[arg(long)]
    stdio: bool,

    /// Log filter, e.g. "info" or "au3lsp=debug"
    #[arg(long, env = "AU3LSP_LOG", default_value = "info")]
    log_level: String,

    /// Print the documentation for a function and exit
    #[arg(long, value_name = "NAME")]
    describe: Option<String>,
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|e| {
        eprintln!("invalid log filter {filter:?}: {e}; falling back to \"info\"");
        EnvFilter::new("info")
    });
    // stdout carries JSON-RPC, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(name) = cli.describe {
        return match describe(&name) {
            Some(doc) => {
                println!("{doc}");
                ExitCode::SUCCESS
            }
            None => {
                eprintln!("unknown function: {name}");
                ExitCode::FAILURE
            }
        };
    }

    init_tracing(&cli.log_level);
    tracing::info!(stdio = cli.stdio, "starting au3lsp");

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = create_service();
    Server::new(stdin, stdout, socket).serve(service).await;
    ExitCode::SUCCESS
}
