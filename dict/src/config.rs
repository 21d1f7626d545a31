use std::env;

use dictionary::DICTIONARY_API_URL;

use crate::utilities::str_to_bool;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base url the word is appended to.
    pub api_url: String,
    /// Print pages as JSON lines instead of text.
    pub json: bool,
}

impl Config {
    pub fn new() -> Self {
        Self::from_vars(|name| env::var(name).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let api_url = var("DICTIONARY_API_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DICTIONARY_API_URL.to_string());

        let json = var("DICTIONARY_JSON")
            .and_then(|value| str_to_bool(&value))
            .unwrap_or(false);

        Self { api_url, json }
    }

    /// Command line flags win over the environment.
    pub fn with_overrides(mut self, api_url: Option<String>, json: bool) -> Self {
        if let Some(api_url) = api_url {
            self.api_url = api_url;
        }
        self.json |= json;
        self
    }
}
