//! Parsing lines typed at the chat prompt.

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Blank line.
    Empty,
    /// Show the whole conversation.
    History,
    /// Start a new conversation.
    Reset,
    /// Exit.
    Quit,
    /// A `/word` that is not a known command.
    UnknownCommand(String),
    /// Text for the agent.
    Message(String),
}

impl Input {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Input::Empty;
        }

        match line {
            "/history" => Input::History,
            "/reset" => Input::Reset,
            "/quit" | "/exit" => Input::Quit,
            cmd if cmd.starts_with('/') && !cmd.contains(char::is_whitespace) => {
                Input::UnknownCommand(cmd.to_string())
            }
            text => Input::Message(text.to_string()),
        }
    }
}
