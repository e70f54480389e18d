use clap::Parser;
use clap_complete::Shell;

use kenyaqa_types::DEFAULT_PROVIDER_TIMEOUT_SECS;

/// CLI arguments for kenyaqa
#[derive(Parser, Debug, Clone)]
#[command(name = "kenyaqa")]
#[command(about = "Kenyan Leaders Q&A - ask about governors, senators, MPs, MCAs and cabinet secretaries")]
#[command(version)]
pub struct Cli {
    /// API key for the model provider
    /// Defaults to GOOGLE_API_KEY, OPENAI_API_KEY or GROQ_API_KEY by backend
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Model name to use
    /// Defaults to GEMINI_MODEL (gemini) or the backend's own default model
    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Backend type (gemini, openai, groq, llama)
    /// llama talks to a llama.cpp server and needs --api-url
    #[arg(long, value_name = "BACKEND", env = "KENYAQA_BACKEND", default_value = "gemini")]
    pub backend: String,

    /// Custom provider URL (Gemini base URL or OpenAI-compatible endpoint)
    #[arg(long, value_name = "URL", env = "KENYAQA_API_URL")]
    pub api_url: Option<String>,

    /// Seconds to wait for the provider before giving up on a question
    #[arg(long, value_name = "SECS", env = "KENYAQA_TIMEOUT_SECS", default_value_t = DEFAULT_PROVIDER_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Web server bind address
    #[arg(long, default_value = "0.0.0.0", env = "KENYAQA_BIND")]
    pub bind: String,

    /// Web server port
    #[arg(long, default_value = "8000", env = "PORT")]
    pub port: u16,

    /// Allowed CORS origin (repeatable). `https://*.example.app` matches subdomains.
    /// Defaults to the local and production frontends
    #[arg(long = "cors-origin", value_name = "ORIGIN")]
    pub cors_origins: Vec<String>,

    /// Allow requests from any origin
    #[arg(long)]
    pub cors_any: bool,

    /// Write every provider request/response to ~/.kenyaqa/logs
    #[arg(long, env = "KENYAQA_LOG_REQUESTS")]
    pub log_requests: bool,

    /// Enable verbose debug logging
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Answer a single question, print it as JSON and exit
    #[arg(long, value_name = "QUESTION")]
    pub ask: Option<String>,

    /// Pretty-print the JSON output (only useful with --ask)
    #[arg(long)]
    pub pretty: bool,

    /// Generate shell completions
    #[arg(long, value_enum)]
    pub generate: Option<Shell>,
}
