use std::process::ExitCode;

use clap::Parser;
use tokio_util::sync::CancellationToken;

pub mod cli;
pub mod config;
pub mod http_probe;

use cli::Args;
use config::model::ProbeConfig;
use http_probe::client::H3Client;
use http_probe::probe::run_probe;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let config = match ProbeConfig::try_from(args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("http3ping: {err}");
            return ExitCode::FAILURE;
        }
    };

    let client = match H3Client::new(&config) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("http3ping: failed to build HTTP client: {err}");
            return ExitCode::FAILURE;
        }
    };

    // Ctrl-C aborts the run before the next request or pause starts.
    let cancel = CancellationToken::new();
    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            signal_cancel.cancel();
        }
    });

    let mut stdout = std::io::stdout();
    if let Err(err) = run_probe(&config, &client, &mut stdout, &cancel).await {
        eprintln!("http3ping: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
