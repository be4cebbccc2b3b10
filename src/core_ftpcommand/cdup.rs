use crate::constants::RESPONSE_OPERATION_SUCCESSFUL;
use crate::core_ftpcommand::error::CommandError;
use crate::core_ftpcommand::handlers::SessionFlow;
use crate::helpers::send_reply;
use crate::session::Session;
use log::debug;
use tokio::net::tcp::OwnedWriteHalf;

/// Handles the CDUP command.
///
/// Moves the working directory to its parent; at the sandbox root this is a
/// no-op. Either way the reply is a success, so CDUP cannot fail.
pub async fn handle_cdup_command(
    writer: &mut OwnedWriteHalf,
    session: &mut Session,
) -> Result<SessionFlow, CommandError> {
    if session.current_dir != session.fs.root() {
        let parent = session
            .current_dir
            .parent()
            .unwrap_or_else(|| session.fs.root())
            .to_path_buf();
        session.current_dir = parent;
        debug!(
            "Working directory moved up to {}",
            session.current_dir.display()
        );
    } else {
        debug!("CDUP at the sandbox root is a no-op");
    }
    send_reply(writer, RESPONSE_OPERATION_SUCCESSFUL.as_bytes()).await?;
    Ok(SessionFlow::Continue)
}
