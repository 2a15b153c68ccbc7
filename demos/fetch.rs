//! One-shot news fetch through the plugin dispatch surface.
//!
//! Usage:
//!   TUSHARE_TOKEN=... cargo run --example fetch -- --start-date 20240101
//!   TUSHARE_TOKEN=... cargo run --example fetch -- --start-date 20240101 --limit 3 --strict

use clap::Parser;
use serde_json::json;
use tushare_sina_news::{ClientConfig, Plugin, TOKEN_ENV_VAR};

#[derive(Parser)]
#[command(name = "fetch", about = "Fetch Sina financial news via the tool surface")]
struct Cli {
    /// First day of the range (YYYYMMDD)
    #[arg(long)]
    start_date: String,

    /// Last day of the range (YYYYMMDD), defaults to start-date
    #[arg(long)]
    end_date: Option<String>,

    /// News category
    #[arg(long)]
    category: Option<String>,

    /// Maximum number of items
    #[arg(long)]
    limit: Option<i64>,

    /// Validate inputs and bound the request timeout
    #[arg(long)]
    strict: bool,

    /// Provider endpoint (defaults to the public Tushare API)
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = if cli.strict {
        ClientConfig::strict()
    } else {
        ClientConfig::default()
    };
    if let Ok(token) = std::env::var(TOKEN_ENV_VAR) {
        config.token = token;
    }
    if let Some(url) = cli.base_url {
        config.base_url = url;
    }

    let plugin = Plugin::new(config);

    let mut params = json!({"start_date": cli.start_date});
    if let Some(end) = cli.end_date {
        params["end_date"] = end.into();
    }
    if let Some(category) = cli.category {
        params["category"] = category.into();
    }
    if let Some(limit) = cli.limit {
        params["limit"] = limit.into();
    }

    let envelope = plugin.dispatch("get_sina_news", &params).await;
    match serde_json::to_string_pretty(&envelope) {
        Ok(rendered) => println!("{rendered}"),
        Err(e) => eprintln!("error: failed to render envelope: {e}"),
    }
}
