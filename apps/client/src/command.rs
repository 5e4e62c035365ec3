//! Terminal commands.

use pairing_core::{Category, NewPair};

pub const HELP: &str = "\
How to play:
  - Select a category to focus (e.g. .NET, Java, API, Cloud).
  - Pick two cards by number to try matching related terms.
  - Matched cards are marked with * and stay visible.
  - Use the admin command to add custom tech pairs.
  - Reset to reshuffle the board.

Commands:
  <n>                          pick card number n
  r | reset                    reshuffle the current category
  c | category <name>          all, dotnet, java, cloud or api
  a | add <term> | <match> | <category>
                               add a new pair
  s | show                     redraw the board
  h | help                     show this help
  q | quit                     leave the game
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Pick(usize),
    Reset,
    Category(Category),
    Add(NewPair),
    Show,
    Help,
    Quit,
}

/// Parse one input line.
pub fn parse(line: &str) -> Result<Command, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Command::Show);
    }

    if let Ok(number) = line.parse::<usize>() {
        if number == 0 {
            return Err("cards are numbered from 1".to_string());
        }
        return Ok(Command::Pick(number));
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "r" | "reset" => Ok(Command::Reset),
        "s" | "show" => Ok(Command::Show),
        "h" | "help" | "?" => Ok(Command::Help),
        "q" | "quit" | "exit" => Ok(Command::Quit),
        "c" | "category" => Category::parse(rest)
            .map(Command::Category)
            .map_err(|e| e.to_string()),
        "a" | "add" => {
            let parts: Vec<&str> = rest.split('|').map(str::trim).collect();
            match parts.as_slice() {
                [term, match_text, category] => {
                    Ok(Command::Add(NewPair::new(*term, *match_text, *category)))
                }
                _ => Err("usage: add <term> | <match> | <category>".to_string()),
            }
        }
        other => Err(format!("unknown command {:?}, type `h` for help", other)),
    }
}
