use crate::core_ftpcommand::error::CommandError;
use tokio::io::AsyncWriteExt;
use tokio::net::tcp::OwnedWriteHalf;

/// Writes one protocol reply to the control socket.
///
/// A failed write means the control channel itself is gone, so it is
/// classified as a connection fault rather than a command fault.
pub async fn send_reply(writer: &mut OwnedWriteHalf, message: &[u8]) -> Result<(), CommandError> {
    writer
        .write_all(message)
        .await
        .map_err(CommandError::Connection)
}
