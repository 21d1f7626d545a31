use dictionary_api::{entry_url, get_definition, parse_base_url};
use reqwest::Url;
use serde::Deserialize;

mod dictionary;
mod dictionary_api;
mod grouping;
mod page;

pub use dictionary::{License, Phonetic, WordDefinition, WordEntry, WordMeaning};
pub use dictionary_api::DICTIONARY_API_URL;
pub use grouping::{flatten_definitions, group_definitions, FlatDefinition, GroupedDefinition};
pub use page::{capitalize, WordPage};

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed to reach the dictionary api: {0}")]
    Fetch(#[source] reqwest::Error),
    #[error("unexpected dictionary api response: {0}")]
    Deserialize(#[source] serde_json::Error),
    #[error("{0}")]
    NotFound(NotFoundError),
    #[error("invalid dictionary api url {0}")]
    InvalidBaseUrl(String),
}

impl DictionaryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// The explanation the api sends along with a 404.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, thiserror::Error)]
#[error("{title}: {message}")]
pub struct NotFoundError {
    pub title: String,
    pub message: String,
    #[serde(default)]
    pub resolution: Option<String>,
}

impl NotFoundError {
    pub(crate) fn for_word(word: &str) -> Self {
        Self {
            title: "No Definitions Found".to_string(),
            message: format!("couldn't find definitions for {word:?}"),
            resolution: None,
        }
    }
}

pub struct Dictionary {
    client: reqwest::Client,
    base_url: Url,
}

impl Dictionary {
    pub fn new() -> Result<Self, DictionaryError> {
        Self::with_base_url(DICTIONARY_API_URL)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self, DictionaryError> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self, DictionaryError> {
        Ok(Self {
            client,
            base_url: parse_base_url(base_url)?,
        })
    }

    /// The address `get_definition` requests for `word`.
    pub fn url_for(&self, word: &str) -> Url {
        entry_url(&self.base_url, word)
    }

    /// Fetches the raw entries for a word. A 404 comes back as `DictionaryError::NotFound`.
    pub async fn get_definition(&self, word: &str) -> Result<Vec<WordEntry>, DictionaryError> {
        get_definition(&self.client, &self.base_url, word).await
    }

    /// Fetches a word and regroups its definitions for display.
    pub async fn lookup(&self, word: &str) -> Result<WordPage, DictionaryError> {
        let entries = self.get_definition(word).await?;
        let page = WordPage::new(word, &entries);
        tracing::debug!(
            word,
            entries = entries.len(),
            groups = page.data.len(),
            "grouped definitions"
        );
        Ok(page)
    }
}
