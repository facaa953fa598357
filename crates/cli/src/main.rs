use clap::{Parser, ValueEnum};
use samp_query_domain::{CliOverrides, QueryOptions, QueryTarget};
use tracing::debug;

mod bootstrap;
mod di;
mod output;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Command {
    /// Server name, gamemode, language and player counts
    Info,
    /// Server rules (console variables)
    Rules,
    /// Player nicknames and scores
    Clients,
    /// Player ids, nicknames, scores and pings
    Detailed,
    /// Round-trip latency in milliseconds
    Ping,
    /// Info, rules and detailed player list together
    Status,
}

#[derive(Parser)]
#[command(name = "samp-query")]
#[command(version)]
#[command(about = "Query SA-MP game servers for status, rules and players")]
struct Cli {
    /// Server address as host:port
    target: String,

    /// What to ask the server
    #[arg(value_enum, default_value_t = Command::Info)]
    command: Command,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Attempts per query before giving up on timeouts
    #[arg(short = 'a', long)]
    attempts: Option<u32>,

    /// Per-attempt timeout in milliseconds
    #[arg(short = 't', long)]
    timeout_ms: Option<u64>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        attempts: cli.attempts,
        timeout_ms: cli.timeout_ms,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    let target: QueryTarget = cli.target.parse()?;
    let client = di::QueryServices::new(&config, target).client;

    debug!(target_addr = %client.target(), command = ?cli.command, "Running query");

    run(&client, cli.command, cli.json).await
}

async fn run(
    client: &samp_query_application::use_cases::QueryClient,
    command: Command,
    json: bool,
) -> anyhow::Result<()> {
    let options = QueryOptions::default();

    let rendered = match command {
        Command::Info => output::info(&client.get_info(options).await?, json)?,
        Command::Rules => output::rules(&client.get_rules(options).await?, json)?,
        Command::Clients => output::clients(&client.get_client_list(options).await?, json)?,
        Command::Detailed => {
            output::detailed_clients(&client.get_detailed_client_list(options).await?, json)?
        }
        Command::Ping => output::ping(client.ping(options).await?, json)?,
        Command::Status => output::status(&client.fetch_status(options).await?, json)?,
    };

    println!("{}", rendered);
    Ok(())
}
