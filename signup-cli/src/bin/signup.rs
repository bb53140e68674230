use clap::{Parser, Subcommand};
use signup_cli::{
    api_client::ApiClient,
    output::{OutputFormat, render_activities, render_activity},
};
use std::error::Error;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// API server URL
    #[arg(
        long,
        short = 'u',
        default_value = "http://localhost:3000",
        env = "SIGNUP_API_URL",
        global = true
    )]
    api_url: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// List all activities
    List,

    /// Show a single activity
    Show {
        /// Activity name (exact, case-sensitive)
        activity: String,
    },

    /// Sign a participant up for an activity
    Signup {
        /// Activity name (exact, case-sensitive)
        activity: String,
        /// Participant email
        email: String,
    },

    /// Unregister a participant from an activity
    Unregister {
        /// Activity name (exact, case-sensitive)
        activity: String,
        /// Participant email
        email: String,
    },
}

async fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let client = ApiClient::new(&cli.api_url)?;
    debug!("Using API at {}", cli.api_url);

    match &cli.command {
        Commands::List => {
            let activities = client.list_activities().await?;
            match cli.output {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&activities)?),
                OutputFormat::Text => print!("{}", render_activities(&activities)),
            }
        }
        Commands::Show { activity } => {
            let details = client.get_activity(activity).await?;
            match cli.output {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&details)?),
                OutputFormat::Text => print!("{}", render_activity(activity, &details)),
            }
        }
        Commands::Signup { activity, email } => {
            let response = client.signup(activity, email).await?;
            print_message(cli.output, &response)?;
        }
        Commands::Unregister { activity, email } => {
            let response = client.unregister(activity, email).await?;
            print_message(cli.output, &response)?;
        }
    }

    Ok(())
}

fn print_message(
    format: OutputFormat,
    response: &signup_http::models::MessageResponse,
) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(response)?),
        OutputFormat::Text => println!("{}", response.message),
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let _ = dotenv::dotenv();

    let cli = Cli::parse();

    if let Err(e) = run(&cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
