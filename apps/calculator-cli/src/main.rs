mod repl;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use calculator_session::{CalculatorHttpClient, HttpClientConfig, Session};
use clap::Parser;
use tokio::io::{AsyncBufReadExt as _, AsyncWriteExt as _, BufReader};
use tracing_subscriber::EnvFilter;

use crate::repl::{Outcome, Repl};

/// Calculator CLI - interactive calculator backed by a calculator server
#[derive(Parser)]
#[command(name = "calculator-cli")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Base URL of the calculator routes
    #[arg(short, long, default_value = calculator_session::DEFAULT_BASE_URL)]
    url: String,

    /// Per-request timeout in seconds
    #[arg(short, long, default_value_t = 10)]
    timeout: u64,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) -> Result<()> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to install tracing subscriber")
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let config =
        HttpClientConfig::new(cli.url).with_request_timeout(Duration::from_secs(cli.timeout));
    let client = Arc::new(CalculatorHttpClient::new(config));
    tracing::info!(url = client.base_url(), "Using calculator server");

    let mut repl = Repl::new(Session::new(client.clone()), client);
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    stdout.write_all(repl::HELP.as_bytes()).await?;
    loop {
        stdout
            .write_all(format!("{}\n> ", repl.status()).as_bytes())
            .await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        match repl.execute_line(&line).await {
            Outcome::Continue(output) => {
                for message in output {
                    stdout.write_all(format!("{message}\n").as_bytes()).await?;
                }
            }
            Outcome::Quit => break,
        }
    }
    stdout.write_all(b"\n").await?;
    Ok(())
}
