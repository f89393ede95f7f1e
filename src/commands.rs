use std::fmt::Display;

pub enum Command {
    Coords { bits: String },
    Bits { coords: Vec<String> },
    Indices { bits: String },
    Squares { indices: Vec<u8> },
    Reverse { bits: String },
    Show { bits: String },
    Quit,
}

#[derive(Debug)]
pub enum CommandParseError {
    Empty,
    Other(String),
}

impl Display for CommandParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                CommandParseError::Empty => "",
                CommandParseError::Other(reason) => reason,
            }
        )
    }
}
impl std::error::Error for CommandParseError {}

pub fn parse_command<T: AsRef<str>>(cmd: T) -> Result<Command, CommandParseError> {
    let words = cmd.as_ref().split_whitespace().collect::<Vec<&str>>();

    use Command::*;

    match words.first() {
        Some(&word) => match word.to_lowercase().as_str() {
            "coords" => match words.get(1) {
                Some(bits) => Ok(Coords {
                    bits: (*bits).to_string(),
                }),
                None => Err(CommandParseError::Other(String::from(
                    "Missing bitstring in coords command",
                ))),
            },
            "bits" => Ok(Bits {
                coords: words[1..].iter().map(|w| (*w).to_string()).collect(),
            }),
            "indices" => match words.get(1) {
                Some(bits) => Ok(Indices {
                    bits: (*bits).to_string(),
                }),
                None => Err(CommandParseError::Other(String::from(
                    "Missing bitstring in indices command",
                ))),
            },
            "squares" => {
                let mut indices = Vec::with_capacity(words.len() - 1);
                for word in &words[1..] {
                    let index = word.parse::<u8>().map_err(|_| {
                        CommandParseError::Other(format!(
                            "Invalid square index in squares command: {word}"
                        ))
                    })?;
                    indices.push(index);
                }
                Ok(Squares { indices })
            }
            "reverse" => match words.get(1) {
                Some(bits) => Ok(Reverse {
                    bits: (*bits).to_string(),
                }),
                None => Err(CommandParseError::Other(String::from(
                    "Missing bitstring in reverse command",
                ))),
            },
            "show" => match words.get(1) {
                Some(bits) => Ok(Show {
                    bits: (*bits).to_string(),
                }),
                None => Err(CommandParseError::Other(String::from(
                    "Missing bitstring in show command",
                ))),
            },
            "quit" | "exit" => Ok(Quit),
            other => Err(CommandParseError::Other(format!(
                "Unknown command: {other}\n\t \
                Valid commands are: 'coords', 'bits', 'indices', 'squares', 'reverse', 'show', 'quit'"
            ))),
        },
        None => Err(CommandParseError::Empty),
    }
}
