use clap::Parser;
use survey_service::ServiceConfig;
use tracing_subscriber::{fmt, EnvFilter};

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if json {
        fmt().json().with_env_filter(filter).init();
    } else {
        fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServiceConfig::parse();
    init_tracing(config.log_json);
    survey_service::run(config).await
}
