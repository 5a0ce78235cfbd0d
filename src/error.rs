//! Error types for command dispatch and room table loading.

use thiserror::Error;

use crate::world::ValidationError;

/// Result of running a command through the dispatch chain.
pub type DispatchResult = Result<(), DispatchError>;

/// Ways a command can fail to resolve.
///
/// The `Display` text is what the player sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// Nothing in the chain knows this verb. A blank line carries an
    /// empty verb.
    #[error("{}", no_command_message(.0))]
    NoCommand(String),

    /// A handler needed another token after the verb.
    #[error("{verb} needs a {argument}.")]
    MissingArgument {
        verb: String,
        argument: &'static str,
    },
}

/// Errors raised while building the room graph.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("room table is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("room table has no rooms")]
    Empty,

    #[error("room {room} has a {direction} neighbor {target}, which does not exist")]
    UnknownRoom {
        room: usize,
        direction: &'static str,
        target: usize,
    },

    #[error("room {room} is linked {direction} to both room {existing} and room {requested}")]
    ConflictingLink {
        room: usize,
        direction: &'static str,
        existing: usize,
        requested: usize,
    },

    #[error("room graph is inconsistent: {}", join_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn no_command_message(verb: &str) -> String {
    if verb.is_empty() {
        "You must say what you will do.".to_string()
    } else {
        format!("{verb} is not a valid command.")
    }
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
