use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::Value;

use platform_client::config::validation::validate_config;
use platform_client::config::{from_env, load_config, ServiceConfig};
use platform_client::observability::logging;
use platform_client::{endpoints, FunctionsClient};

#[derive(Parser)]
#[command(name = "platform-cli")]
#[command(about = "Operator CLI for the backend platform client", long_about = None)]
struct Cli {
    /// TOML config file; environment variables still take precedence.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved URL of a function
    Endpoint { name: String },
    /// Invoke a function and pretty-print the JSON response
    Invoke {
        name: String,

        /// JSON payload; the invocation is a POST when present
        #[arg(short, long)]
        data: Option<String>,

        /// Query parameter as key=value (repeatable); the invocation is a GET
        #[arg(short, long = "param")]
        params: Vec<String>,
    },
    /// Load and validate the configuration, print a summary
    Check,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init("platform_client=info");

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => from_env(),
    };

    match cli.command {
        Commands::Endpoint { name } => {
            println!("{}", endpoints::function_url(&config, &name));
        }
        Commands::Invoke { name, data, params } => {
            invoke(config, &name, data, &params).await;
        }
        Commands::Check => {
            check(&config);
        }
    }

    Ok(())
}

async fn invoke(config: ServiceConfig, name: &str, data: Option<String>, params: &[String]) {
    let client = match FunctionsClient::new(config) {
        Ok(client) => client,
        Err(error) => {
            tracing::error!(error = %error, "client construction failed");
            eprintln!("{}", error.user_message());
            std::process::exit(1);
        }
    };

    let result = if let Some(data) = data {
        let payload: Value = match serde_json::from_str(&data) {
            Ok(payload) => payload,
            Err(error) => {
                eprintln!("--data is not valid JSON: {}", error);
                std::process::exit(2);
            }
        };
        client.invoke(name, &payload).await
    } else {
        let pairs: Vec<(String, String)> = match params.iter().map(|p| parse_param(p)).collect() {
            Ok(pairs) => pairs,
            Err(error) => {
                eprintln!("{}", error);
                std::process::exit(2);
            }
        };
        let query: Vec<(&str, &str)> =
            pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        client.invoke_get(name, &query).await
    };

    match result {
        Ok(value) => match serde_json::to_string_pretty(&value) {
            Ok(pretty) => println!("{}", pretty),
            Err(_) => println!("{}", value),
        },
        Err(error) => {
            // Raw error goes to the log; the user sees the localized message.
            tracing::error!(function = name, error = %error, "invocation failed");
            eprintln!("{}", error.user_message());
            std::process::exit(1);
        }
    }
}

fn check(config: &ServiceConfig) {
    println!("configured:     {}", config.is_configured());
    println!("base_url:       {}", display_or_unset(config.base_url()));
    println!("functions base: {}", display_or_unset(&endpoints::functions_base(config)));
    println!("anon_key:       {}", if config.anon_key().is_empty() { "(unset)" } else { "set" });
    println!(
        "retry:          {} retries, factor {}, {}..{} ms",
        config.retry.retries, config.retry.factor, config.retry.min_delay_ms, config.retry.max_delay_ms
    );

    if !config.service_role_key.is_empty() {
        println!("warning: SERVICE_ROLE_KEY is set — development only, never use it to serve untrusted requests");
    }

    match validate_config(config) {
        Ok(()) => println!("configuration OK"),
        Err(errors) => {
            for error in &errors {
                eprintln!("invalid: {}", error);
            }
            std::process::exit(1);
        }
    }
}

fn display_or_unset(value: &str) -> &str {
    if value.is_empty() {
        "(unset)"
    } else {
        value
    }
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("--param '{}' is not in key=value form", raw)),
    }
}
