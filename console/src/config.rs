//! Process-wide configuration, built once at startup and never mutated.

/// Public endpoint of the backing post API.
const DEFAULT_API_BASE: &str = "https://jsonplaceholder.typicode.com/posts";

/// Immutable application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the post collection; item operations append `/{id}`.
    pub api_base: String,
}

impl AppConfig {
    /// Read configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            api_base: std::env::var("POSTS_API_BASE")
                .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}
