use clap::{Parser, Subcommand};
use std::process::ExitCode;

use crate::clients::supersearch::SupersearchRemote;
use crate::core::tool::Tool;
use crate::infra::config::ApiConfig;
use crate::tools::supersearch::CountLeadsTool;

#[derive(Parser)]
#[command(name = "supersearch-mcp-gateway")]
#[command(about = "SuperSearch MCP Gateway - Admin CLI")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Health check the service
    Health {
        /// Service URL to check
        #[arg(short, long, default_value = "http://localhost:8080")]
        url: String,
    },
    /// Validate configuration
    Config {
        /// Validate config without starting service
        #[arg(long)]
        validate: bool,
    },
    /// Show service status and configuration summary
    Status {
        /// Service URL to check
        #[arg(short, long, default_value = "http://localhost:8080")]
        url: String,
    },
    /// Test remote API connectivity with a free count-leads call
    TestCount {
        /// Job title to count leads for
        #[arg(short, long, default_value = "CEO")]
        title: String,
    },
}

pub async fn run() -> ExitCode {
    let cli = Cli::parse();
    run_commands(cli.command).await
}

pub async fn run_commands(command: Commands) -> ExitCode {
    match command {
        Commands::Health { url } => match health_check(&url).await {
            Ok(_) => {
                println!("✅ Service is healthy");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("❌ Health check failed: {}", e);
                ExitCode::FAILURE
            }
        },
        Commands::Config { validate: _ } => match validate_config() {
            Ok(_) => {
                println!("✅ Configuration is valid");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("❌ Configuration validation failed: {}", e);
                ExitCode::FAILURE
            }
        },
        Commands::Status { url } => match show_status(&url).await {
            Ok(_) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("❌ Status check failed: {}", e);
                ExitCode::FAILURE
            }
        },
        Commands::TestCount { title } => match test_count(&title).await {
            Ok(_) => {
                println!("✅ Remote API test passed");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("❌ Remote API test failed: {}", e);
                ExitCode::FAILURE
            }
        },
    }
}

async fn health_check(url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let client = reqwest::Client::new();
    let response = client
        .get(format!("{}/healthz", url))
        .timeout(std::time::Duration::from_millis(500))
        .send()
        .await?;

    if response.status().is_success() {
        Ok(())
    } else {
        Err(format!("HTTP {}", response.status()).into())
    }
}

fn validate_config() -> Result<(), Box<dyn std::error::Error>> {
    let mode = std::env::var("MODE").unwrap_or_else(|_| "server".into());
    if !matches!(mode.as_str(), "server" | "stdio") {
        return Err(format!("Invalid MODE: {}. Must be 'server' or 'stdio'", mode).into());
    }

    if mode == "server" {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(8080);

        if port == 0 {
            return Err("PORT cannot be 0".into());
        }
    }

    let api = ApiConfig::from_env_and_toml();
    if api.api_key.is_none() {
        return Err("SUPERSEARCH_API_KEY is not set; remote calls will be rejected".into());
    }

    Ok(())
}

async fn show_status(url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let client = reqwest::Client::new();

    let health_response = client
        .get(format!("{}/healthz", url))
        .timeout(std::time::Duration::from_secs(5))
        .send()
        .await?;

    println!(
        "🏥 Health Status: {}",
        if health_response.status().is_success() {
            "✅ Healthy"
        } else {
            "❌ Unhealthy"
        }
    );

    let tools_response = client
        .post(format!("{}/v1/tools", url))
        .header("content-type", "application/json")
        .json(&serde_json::json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "tools.list",
            "params": {}
        }))
        .timeout(std::time::Duration::from_millis(500))
        .send()
        .await;

    match tools_response {
        Ok(resp) if resp.status().is_success() => {
            println!("🔧 Tools: ✅ Available");
        }
        Ok(resp) => {
            println!("🔧 Tools: ❌ HTTP {}", resp.status());
        }
        Err(_) => {
            println!("🔧 Tools: ❌ Unavailable");
        }
    }

    println!("\n📋 Configuration:");
    println!(
        "  Mode: {}",
        std::env::var("MODE").unwrap_or_else(|_| "server".into())
    );
    println!(
        "  Port: {}",
        std::env::var("PORT").unwrap_or_else(|_| "8080".into())
    );
    println!(
        "  Log Level: {}",
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into())
    );

    let api = ApiConfig::from_env_and_toml();
    println!("  API Base URL: {}", api.base_url());
    println!(
        "  API Key: {}",
        if api.api_key.is_some() { "configured" } else { "not configured" }
    );

    Ok(())
}

async fn test_count(title: &str) -> Result<(), Box<dyn std::error::Error>> {
    let api = ApiConfig::from_env_and_toml();
    if api.api_key.is_none() {
        return Err("SUPERSEARCH_API_KEY is not set".into());
    }

    let tool = CountLeadsTool::new(SupersearchRemote::from_config(&api));
    let out = tool
        .call(&serde_json::json!({
            "search_filters": { "title": { "include": [title] } }
        }))
        .await?;

    if let Some(err) = out.get("error") {
        return Err(format!("remote API error: {}", err).into());
    }
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
