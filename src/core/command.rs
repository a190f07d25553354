//! Command parser for the : command system

/// Parsed command from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fetch the dashboard counters
    Refresh,
    /// Submit the quick action form
    Submit,
    /// Select a quick action by value
    Action(Option<String>),
    /// Set the target lead id
    Lead(Option<String>),
    /// Reset the quick action form
    Clear,
    Help,
    Quit,

    // Unknown command
    Unknown(String),
}

/// Parse a command string (without the leading :)
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let mut parts = input.splitn(2, ' ');
    let cmd = parts.next().unwrap_or("");
    let args = parts
        .next()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    match cmd.to_lowercase().as_str() {
        "refresh" | "r" | "stats" => Command::Refresh,
        "submit" | "send" | "s" => Command::Submit,
        "action" | "a" => Command::Action(args),
        "lead" | "l" => Command::Lead(args),
        "clear" | "reset" => Command::Clear,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => Command::Unknown(input.to_string()),
    }
}
