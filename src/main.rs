use clap::Parser;
use csstat::{ClientConfig, Error, StatsService, SteamClient};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Print Counter-Strike stats for a Steam profile.
///
/// Requires STEAM_API_KEY in the environment.
#[derive(Parser)]
#[command(name = "csstat", version)]
struct Cli {
    /// 17-digit Steam ID or steamcommunity.com/profiles/<id> URL
    profile: String,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Override the Steam Web API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Steam app id to fetch stats for
    #[arg(long)]
    app_id: Option<u32>,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(Error::Resolve(err)) => {
            eprintln!("{err}");
            eprintln!("{}", err.guidance());
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<String, Error> {
    let mut config = ClientConfig::from_env()?;
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url.as_str());
    }
    if let Some(app_id) = cli.app_id {
        config = config.with_app_id(app_id);
    }

    let service = StatsService::new(SteamClient::new(config)?);
    let report = service.report(&cli.profile).await?;

    if cli.json {
        Ok(serde_json::to_string_pretty(&report)?)
    } else {
        Ok(report.to_string())
    }
}
