use crate::constants::RESPONSE_SYNTAX_ERROR;
use crate::core_ftpcommand::cdup::handle_cdup_command;
use crate::core_ftpcommand::cwd::handle_cwd_command;
use crate::core_ftpcommand::error::CommandError;
use crate::core_ftpcommand::ftpcommand::{parse_command_line, FtpCommand};
use crate::core_ftpcommand::help::handle_help_command;
use crate::core_ftpcommand::list::handle_list_command;
use crate::core_ftpcommand::pwd::handle_pwd_command;
use crate::core_ftpcommand::quit::handle_quit_command;
use crate::core_ftpcommand::retr::handle_retr_command;
use crate::core_network::pasv::handle_pasv_command;
use crate::session::Session;
use log::{debug, warn};
use std::io;
use tokio::io::AsyncWriteExt;
use tokio::net::tcp::OwnedWriteHalf;

/// What the read-loop should do after a command completes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SessionFlow {
    Continue,
    Quit,
}

/// Parses one control-channel line and runs the matching handler.
///
/// An unknown token or a handler fault is answered with the single generic
/// `500` reply and the session keeps serving; only a broken socket escapes
/// as an error and tears the session down.
pub async fn dispatch(
    writer: &mut OwnedWriteHalf,
    session: &mut Session,
    line: &str,
) -> io::Result<SessionFlow> {
    let (token, argument) = parse_command_line(line);
    let command = match FtpCommand::from_token(&token) {
        Some(command) => command,
        None => {
            warn!("Unrecognized command token: {:?}", token);
            writer.write_all(RESPONSE_SYNTAX_ERROR.as_bytes()).await?;
            return Ok(SessionFlow::Continue);
        }
    };

    debug!("Dispatching {} (argument: {:?})", command, argument);
    match run_handler(writer, session, command, argument).await {
        Ok(flow) => Ok(flow),
        Err(CommandError::Connection(e)) => Err(e),
        Err(fault) => {
            warn!("{} failed: {}", command, fault);
            writer.write_all(RESPONSE_SYNTAX_ERROR.as_bytes()).await?;
            Ok(SessionFlow::Continue)
        }
    }
}

async fn run_handler(
    writer: &mut OwnedWriteHalf,
    session: &mut Session,
    command: FtpCommand,
    argument: Option<String>,
) -> Result<SessionFlow, CommandError> {
    match command {
        FtpCommand::CDUP => handle_cdup_command(writer, session).await,
        FtpCommand::CWD => handle_cwd_command(writer, session, argument).await,
        FtpCommand::HELP => handle_help_command(writer).await,
        FtpCommand::LIST => handle_list_command(writer, session).await,
        FtpCommand::PASV => handle_pasv_command(writer, session).await,
        FtpCommand::PWD => handle_pwd_command(writer, session).await,
        FtpCommand::QUIT => handle_quit_command(writer).await,
        FtpCommand::RETR => handle_retr_command(writer, session, argument).await,
    }
}
