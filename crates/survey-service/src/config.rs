use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "survey-service", about = "Feedback table for the theme preference survey")]
pub struct ServiceConfig {
    /// Address to listen on.
    #[arg(long, env = "SURVEY_BIND", default_value = "127.0.0.1:8787")]
    pub bind: SocketAddr,

    /// JSON-lines file holding stored feedback rows.
    #[arg(long, env = "SURVEY_DATA_FILE", default_value = "design_feedback.jsonl")]
    pub data_file: PathBuf,

    /// Emit logs as JSON lines.
    #[arg(long, env = "SURVEY_LOG_JSON", default_value_t = false)]
    pub log_json: bool,

    /// Largest accepted request body in bytes.
    #[arg(long, env = "SURVEY_MAX_BODY", default_value_t = 64 * 1024)]
    pub max_body_bytes: usize,
}
