use serde::{Deserialize, Deserializer};

/// One result item of the dictionary api.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordEntry {
    pub word: String,
    #[serde(default, deserialize_with = "non_empty")]
    pub phonetic: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phonetics: Vec<Phonetic>,
    #[serde(default, deserialize_with = "non_empty")]
    pub origin: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub meanings: Vec<WordMeaning>,
    #[serde(default)]
    pub license: Option<License>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub source_urls: Vec<String>,
}

impl WordEntry {
    /// Audio of the first phonetic whose text is the entry's own `phonetic`.
    ///
    /// An entry without a `phonetic` matches the first phonetic without text.
    /// Later phonetics with the same text are never consulted, even when the
    /// first match carries no audio.
    pub fn phonetic_audio(&self) -> Option<&str> {
        self.phonetics
            .iter()
            .find(|candidate| candidate.text == self.phonetic)?
            .audio
            .as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phonetic {
    #[serde(default, deserialize_with = "non_empty")]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub audio: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub source_url: Option<String>,
    #[serde(default)]
    pub license: Option<License>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordMeaning {
    #[serde(default, deserialize_with = "non_empty")]
    pub part_of_speech: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub definitions: Vec<WordDefinition>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub synonyms: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WordDefinition {
    pub definition: String,
    #[serde(default, deserialize_with = "non_empty")]
    pub example: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub synonyms: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct License {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Missing, `null` and `""` all decode to `None`.
fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|value| !value.is_empty()))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
