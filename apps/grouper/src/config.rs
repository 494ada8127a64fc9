use anyhow::Result;

use crate::llm_client::DEFAULT_MODEL;

/// Configuration loaded from environment variables.
///
/// Passed explicitly into `GeminiClient::new` — there is no process-global
/// client state. A missing API key is NOT rejected here: it surfaces as an
/// auth error from the Gemini API on the first call.
#[derive(Debug, Clone)]
pub struct Config {
    pub google_api_key: String,
    pub model: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            google_api_key: std::env::var("GOOGLE_API_KEY").unwrap_or_default(),
            model: std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
        })
    }
}
