//! Terminal command parsing.

/// A line typed at the `gameshelf>` prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    /// Select by 1-based list position or by name.
    Select(Selector),
    Add,
    Remove,
    Launch,
    Status,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Position(usize),
    Name(String),
}

/// Why a line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    MissingArgument(&'static str),
    Unknown(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty command"),
            Self::MissingArgument(cmd) => write!(f, "`{cmd}` needs an argument"),
            Self::Unknown(cmd) => write!(f, "unknown command `{cmd}`, try `help`"),
        }
    }
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_ascii_lowercase().as_str() {
            "" => Err(ParseError::Empty),
            "list" | "ls" => Ok(Self::List),
            "select" | "sel" => {
                if rest.is_empty() {
                    return Err(ParseError::MissingArgument("select"));
                }
                let selector = match rest.parse::<usize>() {
                    Ok(n) if n > 0 => Selector::Position(n),
                    _ => Selector::Name(rest.to_string()),
                };
                Ok(Self::Select(selector))
            }
            "add" => Ok(Self::Add),
            "remove" | "rm" => Ok(Self::Remove),
            "launch" | "run" => Ok(Self::Launch),
            "status" => Ok(Self::Status),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(ParseError::Unknown(other.to_string())),
        }
    }
}

pub const HELP: &str = "\
commands:
  list              show the library
  select <n|name>   select a game by position or name
  add               register a new game
  remove            remove the selected game
  launch            launch the selected game
  status            show the running game, if any
  help              show this help
  quit              leave GameShelf";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_verbs() {
        assert_eq!(Command::parse("list"), Ok(Command::List));
        assert_eq!(Command::parse("  ADD "), Ok(Command::Add));
        assert_eq!(Command::parse("rm"), Ok(Command::Remove));
        assert_eq!(Command::parse("run"), Ok(Command::Launch));
        assert_eq!(Command::parse("status"), Ok(Command::Status));
        assert_eq!(Command::parse("?"), Ok(Command::Help));
        assert_eq!(Command::parse("exit"), Ok(Command::Quit));
    }

    #[test]
    fn select_by_position_or_name() {
        assert_eq!(
            Command::parse("select 2"),
            Ok(Command::Select(Selector::Position(2)))
        );
        assert_eq!(
            Command::parse("select Half Life 2"),
            Ok(Command::Select(Selector::Name("Half Life 2".into())))
        );
        // Zero is not a position.
        assert_eq!(
            Command::parse("select 0"),
            Ok(Command::Select(Selector::Name("0".into())))
        );
    }

    #[test]
    fn errors() {
        assert_eq!(Command::parse("   "), Err(ParseError::Empty));
        assert_eq!(
            Command::parse("select"),
            Err(ParseError::MissingArgument("select"))
        );
        assert_eq!(
            Command::parse("dance"),
            Err(ParseError::Unknown("dance".into()))
        );
    }
}
