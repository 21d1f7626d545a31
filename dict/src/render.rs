use dictionary::{capitalize, FlatDefinition, NotFoundError, WordPage};
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn print_page(page: &WordPage, format: OutputFormat) -> serde_json::Result<()> {
    match format {
        OutputFormat::Text => print!("{}", format_page(page)),
        OutputFormat::Json => println!("{}", serde_json::to_string(page)?),
    }
    Ok(())
}

pub fn print_not_found(word: &str, error: &NotFoundError, format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            println!("No definitions found for {word:?}. {}", error.message);
            if let Some(resolution) = &error.resolution {
                println!("  {resolution}");
            }
        }
        OutputFormat::Json => println!("{}", not_found_json(word, error)),
    }
}

fn not_found_json(word: &str, error: &NotFoundError) -> serde_json::Value {
    json!({
        "word": capitalize(word),
        "notFound": true,
        "title": error.title,
        "message": error.message,
        "resolution": error.resolution,
    })
}

pub fn format_page(page: &WordPage) -> String {
    if page.is_empty() {
        return format!("No definitions found for {:?}.\n", page.word);
    }
    let mut lines = vec![page.word.clone()];
    for group in &page.data {
        let label = if group.part_of_speech.is_empty() {
            "(unclassified)"
        } else {
            group.part_of_speech.as_str()
        };
        lines.push(format!("  {label}"));
        for definition in &group.definitions {
            definition_lines(&mut lines, definition);
        }
    }
    lines.push(String::new());
    lines.join("\n")
}

fn definition_lines(lines: &mut Vec<String>, definition: &FlatDefinition) {
    let pronunciation = match (&definition.phonetic, &definition.phonetic_audio) {
        (Some(phonetic), Some(audio)) => format!("{phonetic} [{audio}] "),
        (Some(phonetic), None) => format!("{phonetic} "),
        (None, _) => String::new(),
    };
    lines.push(format!("    {pronunciation}{}", definition.definition));
    if let Some(example) = &definition.example {
        lines.push(format!("      example: {example}"));
    }
    if !definition.synonyms.is_empty() {
        lines.push(format!("      synonyms: {}", definition.synonyms.join(", ")));
    }
    if !definition.antonyms.is_empty() {
        lines.push(format!("      antonyms: {}", definition.antonyms.join(", ")));
    }
}
