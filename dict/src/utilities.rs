use std::io::{self, BufRead, Write};

/// Prompts on stderr and reads one line from stdin. `None` once stdin is closed.
pub fn input(prompt: &str) -> io::Result<Option<String>> {
    input_from(&mut io::stdin().lock(), &mut io::stderr(), prompt)
}

fn input_from(
    reader: &mut impl BufRead,
    prompt_out: &mut impl Write,
    prompt: &str,
) -> io::Result<Option<String>> {
    let mut line = String::new();
    write!(prompt_out, "{prompt}")?;
    prompt_out.flush()?;
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

pub fn str_to_bool(str: &str) -> Option<bool> {
    match &str.trim().to_ascii_lowercase()[..] {
        "y" | "yes" | "yeah" | "yea" | "true" | "on" | "1" => Some(true),
        "n" | "no" | "nope" | "false" | "off" | "0" => Some(false),
        _ => None,
    }
}
