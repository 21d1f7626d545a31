// https://dictionaryapi.dev/ - free, no key, answers 404 with a json explanation for unknown words

use reqwest::{header::CONTENT_TYPE, StatusCode, Url};

use crate::{DictionaryError, NotFoundError, WordEntry};

pub const DICTIONARY_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

pub(crate) fn parse_base_url(base_url: &str) -> Result<Url, DictionaryError> {
    let url = Url::parse(base_url)
        .map_err(|error| DictionaryError::InvalidBaseUrl(format!("{base_url}: {error}")))?;
    if url.cannot_be_a_base() {
        return Err(DictionaryError::InvalidBaseUrl(format!(
            "{base_url}: cannot hold a word path"
        )));
    }
    Ok(url)
}

/// Appends the word as one percent-encoded path segment.
pub(crate) fn entry_url(base_url: &Url, word: &str) -> Url {
    let mut url = base_url.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(word);
    }
    url
}

pub(crate) async fn get_definition(
    client: &reqwest::Client,
    base_url: &Url,
    word: &str,
) -> Result<Vec<WordEntry>, DictionaryError> {
    let url = entry_url(base_url, word);
    tracing::debug!(%url, "looking up word");
    let res: reqwest::Response = client
        .get(url)
        .header(CONTENT_TYPE, "application/json")
        .send()
        .await
        .map_err(DictionaryError::Fetch)?;
    let status = res.status();
    let body = res.bytes().await.map_err(DictionaryError::Fetch)?;
    tracing::debug!(%status, bytes = body.len(), "dictionary api responded");

    if status == StatusCode::NOT_FOUND {
        return Err(DictionaryError::NotFound(not_found(word, &body)));
    }
    serde_json::from_slice(&body).map_err(DictionaryError::Deserialize)
}

fn not_found(word: &str, body: &[u8]) -> NotFoundError {
    match serde_json::from_slice(body) {
        Ok(explanation) => explanation,
        Err(error) => {
            tracing::warn!(word, %error, "undecodable not found response");
            NotFoundError::for_word(word)
        }
    }
}
