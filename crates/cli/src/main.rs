use clap::{Parser, Subcommand, ValueEnum};
use linode_records_domain::{
    domain_record_schema, CliOverrides, Config, DomainError, RecordLookupInput,
};
use std::process::ExitCode;
use tracing::{debug, info};

mod bootstrap;
mod di;
mod output;

#[derive(Parser)]
#[command(name = "linode-records")]
#[command(version)]
#[command(about = "Look up DNS records of Linode-hosted domains")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE", global = true)]
    config: Option<String>,

    /// Linode API base URL
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Linode personal access token
    #[arg(long, env = "LINODE_TOKEN", hide_env_values = true, global = true)]
    token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve one record of a domain by ID or by name
    Lookup {
        /// ID of the domain the record belongs to
        #[arg(long)]
        domain_id: String,

        /// Record name; used when no record ID is given
        #[arg(long)]
        name: Option<String>,

        /// Record ID
        #[arg(long)]
        id: Option<String>,

        /// Output format
        #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Json)]
        output: OutputFormat,
    },

    /// Print the fields a lookup accepts and returns
    Schema,

    /// Write the effective configuration to a file
    InitConfig {
        /// Destination path
        path: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

fn exit_code_for(err: &DomainError) -> ExitCode {
    if err.is_validation() {
        ExitCode::from(2)
    } else if err.is_not_found() {
        ExitCode::from(3)
    } else {
        ExitCode::FAILURE
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        api_url: cli.api_url.clone(),
        token: cli.token.clone(),
        timeout_secs: cli.timeout,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    debug!(
        config_path = ?cli.config.clone().or_else(Config::get_config_path),
        api_url = %config.api.base_url(),
        "Configuration loaded"
    );

    match cli.command {
        Command::Lookup {
            domain_id,
            name,
            id,
            output: format,
        } => {
            let mut entries = vec![("domain_id", domain_id)];
            if let Some(name) = name {
                entries.push(("name", name));
            }
            if let Some(id) = id {
                entries.push(("id", id));
            }
            let use_cases = di::UseCases::new(&config)?;

            let lookup = match RecordLookupInput::from_map(entries) {
                Ok(input) => use_cases.lookup_record.execute(&input).await,
                Err(e) => Err(e),
            };

            match lookup {
                Ok(result) => println!("{}", output::render_result(&result, format)?),
                Err(e) => {
                    debug!(error = ?e, "Lookup failed");
                    eprintln!("Error: {}", e);
                    return Ok(exit_code_for(&e));
                }
            }
        }
        Command::Schema => {
            print!("{}", output::render_schema(domain_record_schema()));
        }
        Command::InitConfig { path } => {
            config.save(&path)?;
            info!(path = %path, "Configuration written");
        }
    }

    Ok(ExitCode::SUCCESS)
}
