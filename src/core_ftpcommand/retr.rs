use crate::constants::{
    RESPONSE_OPEN_FAILED, RESPONSE_OPERATION_SUCCESSFUL, RESPONSE_PASSIVE_DISABLED,
    RESPONSE_TRANSFER_STARTING,
};
use crate::core_ftpcommand::error::CommandError;
use crate::core_ftpcommand::handlers::SessionFlow;
use crate::helpers::send_reply;
use crate::session::Session;
use log::{debug, info};
use tokio::net::tcp::OwnedWriteHalf;

/// Handles the RETR command.
///
/// Requires a prior PASV, checked before the path. The target must resolve
/// to a regular file inside the sandbox; its full contents are sent over the
/// data channel, which is consumed and closed by the transfer.
pub async fn handle_retr_command(
    writer: &mut OwnedWriteHalf,
    session: &mut Session,
    argument: Option<String>,
) -> Result<SessionFlow, CommandError> {
    if session.data_channel.is_disabled() {
        debug!("RETR refused: passive mode is disabled");
        send_reply(writer, RESPONSE_PASSIVE_DISABLED.as_bytes()).await?;
        return Ok(SessionFlow::Continue);
    }

    let target = argument.ok_or(CommandError::MissingArgument)?;
    let path = match session.fs.resolve_file(&session.current_dir, &target) {
        Some(path) => path,
        None => {
            debug!("RETR rejected: {:?} is not a retrievable file", target);
            send_reply(writer, RESPONSE_OPEN_FAILED.as_bytes()).await?;
            return Ok(SessionFlow::Continue);
        }
    };

    let payload = session
        .fs
        .read_file(&path)
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
        .transfer(&payload)
        .await
        .map_err(CommandError::Connection)?;
    session.data_channel.close();
    send_reply(writer, RESPONSE_OPERATION_SUCCESSFUL.as_bytes()).await?;
    info!("Sent {} ({} bytes)", path.display(), payload.len());
    Ok(SessionFlow::Continue)
}
