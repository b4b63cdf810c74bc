use clap::Parser;
use krishiarogya_core::domain::common::{
    ChatCredentials, DEFAULT_CHAT_BASE_URL, DEFAULT_CHAT_MODEL, DEFAULT_ML_SERVICE_URL,
    KrishiConfig, LLMConfig, MlServiceConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "krishiarogya-api",
    version,
    about = "Crop prediction proxy and crop doctor API"
)]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub ml_service: MlServiceArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Prefix added in front of every route, e.g. `/api`
    #[arg(long = "server-root-path", env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    /// Comma separated list of origins, `*` allows any origin
    #[arg(
        long = "server-allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(
        long = "server-metrics",
        env = "METRICS_ENABLED",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    pub metrics_enabled: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    /// Without a key the crop doctor serves an example diagnosis
    #[arg(long = "chat-api-key", env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long = "chat-base-url", env = "OPENAI_BASE_URL", default_value = DEFAULT_CHAT_BASE_URL)]
    pub base_url: String,

    #[arg(long = "chat-model", env = "OPENAI_MODEL", default_value = DEFAULT_CHAT_MODEL)]
    pub model: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct MlServiceArgs {
    #[arg(long = "ml-service-url", env = "ML_SERVICE_URL", default_value = DEFAULT_ML_SERVICE_URL)]
    pub predict_url: String,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    /// Used when `RUST_LOG` is not set
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for KrishiConfig {
    fn from(args: Args) -> Self {
        KrishiConfig {
            llm: LLMConfig {
                credentials: ChatCredentials::from_optional(args.llm.api_key),
                base_url: args.llm.base_url,
                model: args.llm.model,
            },
            ml_service: MlServiceConfig {
                predict_url: args.ml_service.predict_url,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_flags() {
        let args = Args::parse_from([
            "krishiarogya-api",
            "--server-port",
            "8080",
            "--server-allowed-origins",
            "http://localhost:5173,http://localhost:3000",
            "--chat-api-key",
            "sk-test",
            "--chat-model",
            "llama-3.1-8b-instant",
            "--ml-service-url",
            "http://ml:8000/predict",
            "--server-metrics",
            "false",
        ]);

        assert_eq!(args.server.port, 8080);
        assert_eq!(
            args.server.allowed_origins,
            vec!["http://localhost:5173", "http://localhost:3000"]
        );
        assert!(!args.server.metrics_enabled);

        let config = KrishiConfig::from(args);
        assert_eq!(
            config.llm.credentials,
            ChatCredentials::Configured("sk-test".to_string())
        );
        assert_eq!(config.llm.model, "llama-3.1-8b-instant");
        assert_eq!(config.ml_service.predict_url, "http://ml:8000/predict");
    }

    #[test]
    fn test_empty_api_key_flag_means_missing_credentials() {
        let args = Args::parse_from(["krishiarogya-api", "--chat-api-key", ""]);
        let config = KrishiConfig::from(args);
        assert_eq!(config.llm.credentials, ChatCredentials::Missing);
    }
}
