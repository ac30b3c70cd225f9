//! Command line entry point for the childcare benefit engine.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use childcare_benefit_engine::api::{AppState, create_router};
use childcare_benefit_engine::calculation::Calculator;
use childcare_benefit_engine::config::ConfigLoader;
use childcare_benefit_engine::models::{AgeBracket, CalculatorInput, ValidationOutcome};

#[derive(Parser)]
#[command(name = "childcare-benefit")]
#[command(about = "Japanese childcare leave benefit calculator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the HTTP API
    Serve {
        /// Directory holding scheme.yaml and rates/
        #[arg(long, env = "CHILDCARE_CONFIG", default_value = "./config/jp_childcare")]
        config: PathBuf,

        /// Address to listen on
        #[arg(long, env = "CHILDCARE_BIND", default_value = "127.0.0.1:3000")]
        bind: SocketAddr,
    },

    /// Calculate a single salary and print the result as JSON
    Calculate {
        /// Directory holding scheme.yaml and rates/
        #[arg(long, env = "CHILDCARE_CONFIG", default_value = "./config/jp_childcare")]
        config: PathBuf,

        /// Gross monthly salary in yen
        #[arg(long)]
        salary: i64,

        /// Age bracket
        #[arg(long, value_parser = parse_age, default_value = "under40")]
        age: AgeBracket,

        /// Date whose rates apply (YYYY-MM-DD); newest rates when omitted
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

fn parse_age(value: &str) -> Result<AgeBracket, String> {
    match value {
        "under40" => Ok(AgeBracket::Under40),
        "over40" => Ok(AgeBracket::Over40),
        other => Err(format!("expected under40 or over40, got '{}'", other)),
    }
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,hyper=info,tower=info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config, bind } => {
            let loader = ConfigLoader::load(&config)
                .with_context(|| format!("Failed to load configuration from {}", config.display()))?;
            let router = create_router(AppState::new(loader));

            let listener = tokio::net::TcpListener::bind(bind)
                .await
                .with_context(|| format!("Failed to bind {}", bind))?;
            info!(address = %bind, "Listening");
            axum::serve(listener, router).await.context("Server error")?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Calculate {
            config,
            salary,
            age,
            date,
        } => {
            let loader = ConfigLoader::load(&config)
                .with_context(|| format!("Failed to load configuration from {}", config.display()))?;
            let rates = match date {
                Some(date) => loader.rates_for(date)?,
                None => loader.latest(),
            };
            let calculator = Calculator::new(rates);

            let outcome = calculator.validate_input(salary);
            if let ValidationOutcome::Error(issue) = &outcome {
                eprintln!("error: {}", issue.message);
                return Ok(ExitCode::FAILURE);
            }
            if let Some(issue) = outcome.issue() {
                eprintln!("warning: {}", issue.message);
            }

            let result = calculator.calculate(&CalculatorInput::new(salary, age));
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}
