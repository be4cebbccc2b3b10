use crate::core_ftpcommand::error::CommandError;
use crate::core_ftpcommand::handlers::SessionFlow;
use crate::helpers::send_reply;
use crate::session::Session;
use log::debug;
use tokio::net::tcp::OwnedWriteHalf;

/// Handles the PWD command: reports the working directory relative to the
/// sandbox root, rendered `/`-rooted.
pub async fn handle_pwd_command(
    writer: &mut OwnedWriteHalf,
    session: &Session,
) -> Result<SessionFlow, CommandError> {
    let display = session.fs.display_path(&session.current_dir);
    debug!("Current working directory: {}", display);
    let reply = format!("257 \"{}\" is current directory.\r\n", display);
    send_reply(writer, reply.as_bytes()).await?;
    Ok(SessionFlow::Continue)
}
