//! Special commands parser for interactive chat mode
//!
//! This module parses the special commands that can be entered during an
//! interactive chat session. Special commands drive the session rather than
//! being submitted to the assistant:
//! - Archive the current conversation and start fresh
//! - List and re-open archived chats
//! - View session status
//! - Display help information
//! - Exit the session
//!
//! Commands are prefixed with `/` and are case-insensitive.

use thiserror::Error;

/// Errors that can occur when parsing special commands
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Unknown command was entered
    #[error("Unknown command: {0}\n\nType '/help' to see available commands")]
    UnknownCommand(String),

    /// Command was given an unsupported argument
    #[error("Unsupported argument for {command}: {arg}\n\nType '/help' to see valid usage")]
    UnsupportedArgument { command: String, arg: String },

    /// Command requires an argument but none was provided
    #[error("Command {command} requires an argument\n\nUsage: {usage}")]
    MissingArgument { command: String, usage: String },

    /// Command argument could not be parsed
    #[error("Invalid argument for {command}: {arg}\n\nUsage: {usage}")]
    InvalidArgument {
        command: String,
        arg: String,
        usage: String,
    },
}

/// Special commands that can be executed during interactive chat
///
/// These commands drive the session state or provide information,
/// rather than being submitted to the assistant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecialCommand {
    /// Archive the active chat and start a fresh one
    NewChat,

    /// List archived chats, newest first
    History,

    /// Re-open an archived chat by id
    Open(u64),

    /// Display session status
    ShowStatus,

    /// Display help information
    Help,

    /// Exit the interactive session
    Exit,

    /// Not a special command
    ///
    /// The input should be submitted to the assistant.
    None,
}

/// Parse a user input string into a special command
///
/// Checks if the input matches any special command pattern.
/// Commands are case-insensitive.
///
/// # Arguments
///
/// * `input` - The user input string to parse
///
/// # Returns
///
/// Returns Ok(SpecialCommand) for valid commands or SpecialCommand::None
/// for non-commands. Returns Err(CommandError) for malformed commands.
///
/// # Errors
///
/// Returns CommandError::UnknownCommand if input starts with "/" but is not
/// a valid command. Returns CommandError::MissingArgument or
/// CommandError::InvalidArgument when `/open` lacks a usable id, and
/// CommandError::UnsupportedArgument when a no-argument command is given one.
///
/// # Examples
///
/// ```
/// use mentora::commands::special_commands::{parse_special_command, SpecialCommand};
///
/// let cmd = parse_special_command("/new").unwrap();
/// assert_eq!(cmd, SpecialCommand::NewChat);
///
/// let cmd = parse_special_command("/open 2").unwrap();
/// assert_eq!(cmd, SpecialCommand::Open(2));
///
/// let cmd = parse_special_command("hello assistant").unwrap();
/// assert_eq!(cmd, SpecialCommand::None);
///
/// // Invalid command returns error
/// assert!(parse_special_command("/foo").is_err());
/// ```
pub fn parse_special_command(input: &str) -> Result<SpecialCommand, CommandError> {
    let trimmed = input.trim();
    let lower = trimmed.to_lowercase();

    // If input doesn't start with "/", it's not a command (except exit/quit)
    if !trimmed.starts_with('/') && lower != "exit" && lower != "quit" {
        return Ok(SpecialCommand::None);
    }

    match lower.as_str() {
        "/new" => Ok(SpecialCommand::NewChat),
        input if input.starts_with("/new ") => Err(CommandError::UnsupportedArgument {
            command: "/new".to_string(),
            arg: input[5..].trim().to_string(),
        }),

        "/history" => Ok(SpecialCommand::History),
        input if input.starts_with("/history ") => Err(CommandError::UnsupportedArgument {
            command: "/history".to_string(),
            arg: input[9..].trim().to_string(),
        }),

        // Handle /open with and without an id
        "/open" => Err(CommandError::MissingArgument {
            command: "/open".to_string(),
            usage: "/open <chat_id>".to_string(),
        }),
        input if input.starts_with("/open ") => {
            let arg = input[6..].trim();
            match arg.parse::<u64>() {
                Ok(id) => Ok(SpecialCommand::Open(id)),
                Err(_) => Err(CommandError::InvalidArgument {
                    command: "/open".to_string(),
                    arg: arg.to_string(),
                    usage: "/open <chat_id>".to_string(),
                }),
            }
        }

        // Status and help
        "/status" => Ok(SpecialCommand::ShowStatus),
        input if input.starts_with("/status ") => Err(CommandError::UnsupportedArgument {
            command: "/status".to_string(),
            arg: input[8..].trim().to_string(),
        }),
        "/help" | "/?" => Ok(SpecialCommand::Help),
        input if input.starts_with("/help ") => Err(CommandError::UnsupportedArgument {
            command: "/help".to_string(),
            arg: input[6..].trim().to_string(),
        }),

        // Exit commands
        "exit" | "quit" | "/exit" | "/quit" => Ok(SpecialCommand::Exit),

        // Unknown command starting with "/"
        input if input.starts_with('/') => {
            let cmd = input.split_whitespace().next().unwrap_or(input);
            Err(CommandError::UnknownCommand(cmd.to_string()))
        }

        // Not a special command
        _ => Ok(SpecialCommand::None),
    }
}

/// Display help text for special commands
///
/// Shows all available special commands with their descriptions
/// and usage examples.
///
/// # Examples
///
/// ```
/// use mentora::commands::special_commands::print_help;
///
/// print_help();
/// ```
pub fn print_help() {
    println!(
        r#"
Special Commands for Interactive Chat Mode
===========================================

SESSION CONTROL:
  /new            - Archive the current conversation and start fresh
  /open <id>      - Re-open an archived chat by id (ids come from /history)
  exit            - Exit interactive mode
  quit            - Same as exit

SESSION INFORMATION:
  /history        - List archived chats, newest first
  /status         - Show archived chats, active messages, and responder
  /help           - Show this help message
  /?              - Same as /help

NOTES:
  - Commands are case-insensitive
  - Regular text (not starting with /) is sent to the assistant
  - Replies are canned samples; they do not depend on your input
  - An empty conversation is never archived; /new on a fresh chat simply
    stays on the fresh chat
"#
    );
}
