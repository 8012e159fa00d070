/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    /// Filter directives used when `RUST_LOG` is not set.
    pub default_directives: String,
}

impl TracingConfig {
    pub fn new(environment: impl Into<String>, json_format: bool, level: &str) -> Self {
        Self {
            environment: environment.into(),
            json_format,
            default_directives: format!("{level},speech_bot={level},tower_http=info"),
        }
    }
}
