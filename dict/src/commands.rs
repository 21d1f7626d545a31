#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Exit,
    Define(String),
    Empty,
}

/// Reads one prompt line. Anything that is not a command is looked up as is.
pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let mut parts = line.split_ascii_whitespace();
    match parts.next() {
        None => Command::Empty,
        Some("exit" | "leave" | "quit" | "e" | "q" | "l") => Command::Exit,
        Some("define" | "find") => Command::Define(parts.collect::<Vec<&str>>().join(" ")),
        Some(_) => Command::Define(line.to_string()),
    }
}
