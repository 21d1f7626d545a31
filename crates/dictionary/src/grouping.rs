use std::collections::HashMap;

use serde::Serialize;

use crate::WordEntry;

/// A single definition carrying the context of the meaning and entry it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phonetic_audio: Option<String>,
    pub definition: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

/// Definitions sharing a part of speech. Absent parts of speech use `""`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupedDefinition {
    pub part_of_speech: String,
    pub definitions: Vec<FlatDefinition>,
}

/// Emits one record per definition, walking entries, then meanings, then definitions.
pub fn flatten_definitions(entries: &[WordEntry]) -> Vec<FlatDefinition> {
    let mut definitions = Vec::new();
    for entry in entries {
        let phonetic_audio = entry.phonetic_audio();
        for meaning in &entry.meanings {
            for definition in &meaning.definitions {
                definitions.push(FlatDefinition {
                    part_of_speech: meaning.part_of_speech.clone(),
                    phonetic: entry.phonetic.clone(),
                    phonetic_audio: phonetic_audio.map(str::to_owned),
                    definition: definition.definition.clone(),
                    example: definition.example.clone(),
                    synonyms: definition.synonyms.clone(),
                    antonyms: definition.antonyms.clone(),
                });
            }
        }
    }
    definitions
}

/// Groups the flattened definitions by part of speech.
///
/// Groups come out in the order their part of speech is first seen, and each
/// group keeps the flattening order of its definitions.
pub fn group_definitions(entries: &[WordEntry]) -> Vec<GroupedDefinition> {
    let mut groups: Vec<GroupedDefinition> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();
    for definition in flatten_definitions(entries) {
        let key = definition.part_of_speech.clone().unwrap_or_default();
        let index = *positions.entry(key.clone()).or_insert_with(|| {
            groups.push(GroupedDefinition {
                part_of_speech: key,
                definitions: Vec::new(),
            });
            groups.len() - 1
        });
        groups[index].definitions.push(definition);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entries(value: serde_json::Value) -> Vec<WordEntry> {
        serde_json::from_value(value).expect("valid entries")
    }

    fn definition_texts(group: &GroupedDefinition) -> Vec<&str> {
        group
            .definitions
            .iter()
            .map(|definition| &definition.definition[..])
            .collect()
    }

    fn sample() -> Vec<WordEntry> {
        entries(json!([
            {
                "word": "run",
                "phonetic": "/ɹʌn/",
                "phonetics": [{ "text": "/ɹʌn/", "audio": "run-us.mp3" }],
                "meanings": [
                    {
                        "partOfSpeech": "verb",
                        "definitions": [
                            { "definition": "to move swiftly", "synonyms": ["sprint"] },
                            { "definition": "to flee" }
                        ]
                    },
                    {
                        "partOfSpeech": "noun",
                        "definitions": [{ "definition": "an act of running" }]
                    }
                ]
            },
            {
                "word": "run",
                "phonetic": "/ɹan/",
                "phonetics": [],
                "meanings": [
                    {
                        "partOfSpeech": "verb",
                        "definitions": [{ "definition": "to operate a machine" }]
                    },
                    {
                        "definitions": [{ "definition": "untagged sense" }]
                    },
                    {
                        "partOfSpeech": "",
                        "definitions": [{ "definition": "another untagged sense" }]
                    }
                ]
            }
        ]))
    }

    #[test]
    fn flattening_emits_every_definition_in_order() {
        let flat = flatten_definitions(&sample());
        let texts: Vec<&str> = flat.iter().map(|d| &d.definition[..]).collect();
        assert_eq!(
            texts,
            vec![
                "to move swiftly",
                "to flee",
                "an act of running",
                "to operate a machine",
                "untagged sense",
                "another untagged sense",
            ]
        );
    }

    #[test]
    fn flattening_inherits_entry_and_meaning_context() {
        let flat = flatten_definitions(&sample());
        assert_eq!(flat[0].part_of_speech.as_deref(), Some("verb"));
        assert_eq!(flat[0].phonetic.as_deref(), Some("/ɹʌn/"));
        assert_eq!(flat[0].phonetic_audio.as_deref(), Some("run-us.mp3"));
        assert_eq!(flat[0].synonyms, vec!["sprint".to_string()]);
        assert!(flat[1].synonyms.is_empty());
        assert!(flat[1].antonyms.is_empty());
        assert_eq!(flat[3].phonetic.as_deref(), Some("/ɹan/"));
        assert_eq!(flat[3].phonetic_audio, None);
    }

    #[test]
    fn groups_keep_first_seen_order() {
        let groups = group_definitions(&sample());
        let keys: Vec<&str> = groups.iter().map(|g| &g.part_of_speech[..]).collect();
        assert_eq!(keys, vec!["verb", "noun", ""]);
        assert_eq!(
            definition_texts(&groups[0]),
            vec!["to move swiftly", "to flee", "to operate a machine"]
        );
        assert_eq!(definition_texts(&groups[1]), vec!["an act of running"]);
    }

    #[test]
    fn absent_parts_of_speech_share_one_group() {
        let groups = group_definitions(&sample());
        let untagged: Vec<&GroupedDefinition> = groups
            .iter()
            .filter(|group| group.part_of_speech.is_empty())
            .collect();
        assert_eq!(untagged.len(), 1);
        assert_eq!(
            definition_texts(untagged[0]),
            vec!["untagged sense", "another untagged sense"]
        );
        assert!(untagged[0]
            .definitions
            .iter()
            .all(|definition| definition.part_of_speech.is_none()));
    }

    #[test]
    fn grouping_neither_drops_nor_duplicates() {
        let entries = sample();
        let flat = flatten_definitions(&entries);
        let groups = group_definitions(&entries);

        let total: usize = entries
            .iter()
            .flat_map(|entry| &entry.meanings)
            .map(|meaning| meaning.definitions.len())
            .sum();
        assert_eq!(flat.len(), total);
        assert_eq!(groups.iter().map(|g| g.definitions.len()).sum::<usize>(), total);

        let mut regrouped: Vec<&FlatDefinition> =
            groups.iter().flat_map(|group| &group.definitions).collect();
        let mut flattened: Vec<&FlatDefinition> = flat.iter().collect();
        regrouped.sort_by(|a, b| a.definition.cmp(&b.definition));
        flattened.sort_by(|a, b| a.definition.cmp(&b.definition));
        assert_eq!(regrouped, flattened);
    }

    #[test]
    fn first_matching_phonetic_wins() {
        let entries = entries(json!([{
            "word": "test",
            "phonetic": "/tɛst/",
            "phonetics": [
                { "text": "/tɛst/", "audio": "a.mp3" },
                { "text": "/tɛst/", "audio": "b.mp3" }
            ],
            "meanings": [{ "partOfSpeech": "noun", "definitions": [{ "definition": "a trial" }] }]
        }]));
        let groups = group_definitions(&entries);
        assert_eq!(groups[0].definitions[0].phonetic_audio.as_deref(), Some("a.mp3"));
    }

    #[test]
    fn entry_without_phonetic_takes_textless_audio() {
        let entries = entries(json!([{
            "word": "hello",
            "phonetics": [
                { "audio": "hello-uk.mp3" },
                { "text": "/həˈləʊ/", "audio": "hello-us.mp3" }
            ],
            "meanings": [{ "partOfSpeech": "noun", "definitions": [{ "definition": "a greeting" }] }]
        }]));
        let groups = group_definitions(&entries);
        let definition = &groups[0].definitions[0];
        assert_eq!(definition.phonetic, None);
        assert_eq!(definition.phonetic_audio.as_deref(), Some("hello-uk.mp3"));
    }

    #[test]
    fn no_entries_no_groups() {
        assert!(group_definitions(&[]).is_empty());
        let empty_meanings = entries(json!([{ "word": "x", "meanings": [] }]));
        assert!(group_definitions(&empty_meanings).is_empty());
    }

    #[test]
    fn cat_groups_into_the_display_shape() {
        let entries = entries(json!([{
            "word": "cat",
            "phonetic": "/kæt/",
            "phonetics": [{ "text": "/kæt/", "audio": "cat.mp3" }],
            "meanings": [{
                "partOfSpeech": "noun",
                "definitions": [{
                    "definition": "a small domesticated carnivore",
                    "synonyms": [],
                    "antonyms": []
                }]
            }]
        }]));

        let groups = group_definitions(&entries);
        assert_eq!(
            groups,
            vec![GroupedDefinition {
                part_of_speech: "noun".to_string(),
                definitions: vec![FlatDefinition {
                    part_of_speech: Some("noun".to_string()),
                    phonetic: Some("/kæt/".to_string()),
                    phonetic_audio: Some("cat.mp3".to_string()),
                    definition: "a small domesticated carnivore".to_string(),
                    example: None,
                    synonyms: vec![],
                    antonyms: vec![],
                }],
            }]
        );
        assert_eq!(
            serde_json::to_value(&groups).expect("serializable"),
            json!([{
                "partOfSpeech": "noun",
                "definitions": [{
                    "partOfSpeech": "noun",
                    "phonetic": "/kæt/",
                    "phoneticAudio": "cat.mp3",
                    "definition": "a small domesticated carnivore",
                    "synonyms": [],
                    "antonyms": []
                }]
            }])
        );
    }
}
