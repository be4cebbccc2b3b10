use crate::constants::RESPONSE_GOODBYE;
use crate::core_ftpcommand::error::CommandError;
use crate::core_ftpcommand::handlers::SessionFlow;
use crate::helpers::send_reply;
use log::info;
use tokio::net::tcp::OwnedWriteHalf;

/// Handles the QUIT command: sends the goodbye reply and signals the
/// read-loop to terminate the session.
pub async fn handle_quit_command(
    writer: &mut OwnedWriteHalf,
) -> Result<SessionFlow, CommandError> {
    send_reply(writer, RESPONSE_GOODBYE.as_bytes()).await?;
    info!("QUIT received, terminating session");
    Ok(SessionFlow::Quit)
}
