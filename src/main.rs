use std::{process::ExitCode, time::Duration};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use horolong::{
    body::Body,
    client::LongClient,
    config::ClientConfig,
    csv_output::write_csv,
    date::{DateRangeRequest, DateValue},
    horolong_errors::Result,
};

/// Query the sun, moon or new moon ecliptic longitude over a date range and print it as CSV
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Route to query: sun, moon or new_moon
    body: Body,

    /// Start of the range, YYYY-MM-DD[THH:MM:SS]
    #[arg(short, long)]
    start: DateValue,

    /// End of the range, YYYY-MM-DD[THH:MM:SS]
    #[arg(short, long)]
    end: DateValue,

    /// Service base URL, overrides HOROLONG_BASE_URL
    #[arg(long)]
    base_url: Option<String>,

    /// Request timeout in seconds, overrides HOROLONG_TIMEOUT_SECS
    #[arg(long)]
    timeout: Option<u64>,

    /// Check the range locally before sending it, overrides HOROLONG_VALIDATE
    /// (`--validate=false` turns it off)
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    validate: Option<bool>,
}

impl Args {
    fn config(&self) -> Result<ClientConfig> {
        Ok(self.override_config(ClientConfig::from_env()?))
    }

    /// Flags given on the command line win over `config`.
    fn override_config(&self, mut config: ClientConfig) -> ClientConfig {
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url.clone());
        }
        if let Some(secs) = self.timeout {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        if let Some(validate) = self.validate {
            config = config.with_validation(validate);
        }
        config
    }
}

async fn run(args: Args) -> Result<()> {
    let client = LongClient::new(&args.config()?)?;
    let request = DateRangeRequest::new(args.start, args.end);
    let longs = client.longitudes(args.body, &request).await?;
    write_csv(std::io::stdout().lock(), &longs)
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("horolong: {err}");
            ExitCode::FAILURE
        }
    }
}
