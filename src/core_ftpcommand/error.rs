use std::io;
use thiserror::Error;

/// Faults a command handler can raise.
///
/// Everything except `Connection` is answered on the control channel with the
/// generic `500` reply and the session keeps serving; `Connection` means the
/// socket itself is broken, so the session goes down instead of replying.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Command is missing its required argument")]
    MissingArgument,

    #[error("Failed to bind the passive listener: {0}")]
    PassiveBind(io::Error),

    #[error("Passive mode requires an IPv4 control address")]
    PassiveAddress,

    #[error("Filesystem error: {0}")]
    Filesystem(io::Error),

    #[error("Connection error: {0}")]
    Connection(io::Error),
}
