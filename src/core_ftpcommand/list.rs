use crate::constants::{
    RESPONSE_OPERATION_SUCCESSFUL, RESPONSE_PASSIVE_DISABLED, RESPONSE_TRANSFER_STARTING,
};
use crate::core_ftpcommand::error::CommandError;
use crate::core_ftpcommand::handlers::SessionFlow;
use crate::helpers::send_reply;
use crate::session::Session;
use log::{debug, info};
use tokio::net::tcp::OwnedWriteHalf;

/// Handles the LIST command.
///
/// Requires a prior PASV. The listing of the working directory is sent over
/// the data channel, which is consumed and closed by the transfer.
pub async fn handle_list_command(
    writer: &mut OwnedWriteHalf,
    session: &mut Session,
) -> Result<SessionFlow, CommandError> {
    if session.data_channel.is_disabled() {
        debug!("LIST refused: passive mode is disabled");
        send_reply(writer, RESPONSE_PASSIVE_DISABLED.as_bytes()).await?;
        return Ok(SessionFlow::Continue);
    }

    let listing = session
        .fs
        .list_directory(&session.current_dir)
        .await
        .map_err(CommandError::Filesystem)?;

    send_reply(writer, RESPONSE_TRANSFER_STARTING.as_bytes()).await?;
    session
        .data_channel
        .accept_once()
        .await
        .map_err(CommandError::Connection)?;
    session
        .data_channel
        .transfer(listing.as_bytes())
        .await
        .map_err(CommandError::Connection)?;
    session.data_channel.close();
    send_reply(writer, RESPONSE_OPERATION_SUCCESSFUL.as_bytes()).await?;
    info!(
        "Directory listing sent for {}",
        session.current_dir.display()
    );
    Ok(SessionFlow::Continue)
}
