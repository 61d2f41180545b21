/// One line typed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Refresh,
    Retry,
    ScrollDown,
    ScrollUp,
    /// 1-based row number as displayed.
    Open(usize),
    Help,
    Quit,
}

pub const HELP: &str = "commands: [j] scroll down  [k] scroll up  [r] refresh  [o N] open row N  [?] help  [q] quit";

pub fn parse_command(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    let command = match words.next()? {
        "j" | "down" => Command::ScrollDown,
        "k" | "up" => Command::ScrollUp,
        "r" | "refresh" => Command::Refresh,
        "t" | "retry" => Command::Retry,
        "?" | "h" | "help" => Command::Help,
        "q" | "quit" => Command::Quit,
        "o" | "open" => {
            let row: usize = words.next()?.parse().ok()?;
            if row == 0 {
                return None;
            }
            Command::Open(row)
        }
        _ => return None,
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_forms() {
        assert_eq!(parse_command("j"), Some(Command::ScrollDown));
        assert_eq!(parse_command("  refresh "), Some(Command::Refresh));
        assert_eq!(parse_command("t"), Some(Command::Retry));
        assert_eq!(parse_command("q"), Some(Command::Quit));
    }

    #[test]
    fn open_needs_a_positive_row() {
        assert_eq!(parse_command("o 3"), Some(Command::Open(3)));
        assert_eq!(parse_command("open 12"), Some(Command::Open(12)));
        assert_eq!(parse_command("o"), None);
        assert_eq!(parse_command("o 0"), None);
        assert_eq!(parse_command("o x"), None);
    }

    #[test]
    fn blank_and_unknown_lines_are_ignored() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("   "), None);
        assert_eq!(parse_command("dance"), None);
    }
}
