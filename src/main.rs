use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use climategpt::api::{HttpQueryClient, QueryError};
use climategpt::config::{ClientConfig, ConfigError, StalePolicy};
use climategpt::controller::QueryController;
use climategpt::state::query::RequestState;
use climategpt::terminal;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("client setup failed: {0}")]
    Client(#[from] QueryError),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "climategpt", about = "Ask ClimateGPT a climate related question")]
struct Cli {
    /// Query endpoint; overrides `CLIMATEGPT_API_URL`.
    #[arg(long)]
    endpoint: Option<String>,

    /// Request timeout in seconds; overrides `CLIMATEGPT_REQUEST_TIMEOUT_SECS`.
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Drop responses from submissions superseded by a newer one.
    #[arg(long, default_value_t = false)]
    latest_only: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Submit a single question and print the reply.
    Ask {
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },
}

impl Cli {
    fn config(&self) -> Result<ClientConfig, ConfigError> {
        let mut config = ClientConfig::from_env()?;
        if let Some(endpoint) = &self.endpoint {
            config.endpoint.clone_from(endpoint);
        }
        if let Some(secs) = self.timeout_secs {
            config.request_timeout = Some(Duration::from_secs(secs));
        }
        if self.latest_only {
            config.stale_policy = StalePolicy::LatestOnly;
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode, CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.config()?;
    let client = HttpQueryClient::new(&config)?;
    tracing::info!(endpoint = client.endpoint(), policy = ?config.stale_policy, "climategpt client configured");

    let controller = QueryController::new(client, config.stale_policy);

    match cli.command {
        Some(Command::Ask { question }) => {
            let state = controller.submit(&question.join(" ")).await;
            Ok(print_outcome(&state))
        }
        None => {
            let stdin = BufReader::new(tokio::io::stdin());
            terminal::run(&controller, stdin, &mut std::io::stdout()).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn print_outcome(state: &RequestState) -> ExitCode {
    match state {
        RequestState::Succeeded(reply) => {
            println!("{reply}");
            ExitCode::SUCCESS
        }
        RequestState::Failed(message) => {
            eprintln!("{message}");
            ExitCode::from(1)
        }
        RequestState::Idle | RequestState::Loading => ExitCode::from(2),
    }
}
