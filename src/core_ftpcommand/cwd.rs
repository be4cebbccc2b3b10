use crate::constants::{RESPONSE_OPEN_FAILED, RESPONSE_OPERATION_SUCCESSFUL};
use crate::core_ftpcommand::error::CommandError;
use crate::core_ftpcommand::handlers::SessionFlow;
use crate::helpers::send_reply;
use crate::session::Session;
use log::{debug, info};
use tokio::net::tcp::OwnedWriteHalf;

/// Handles the CWD command.
///
/// The target is resolved against the working directory and accepted only if
/// it is an existing directory that is still inside the sandbox root.
pub async fn handle_cwd_command(
    writer: &mut OwnedWriteHalf,
    session: &mut Session,
    argument: Option<String>,
) -> Result<SessionFlow, CommandError> {
    let target = argument.ok_or(CommandError::MissingArgument)?;

    match session.fs.resolve_dir(&session.current_dir, &target) {
        Some(dir) => {
            info!("Working directory changed to {}", dir.display());
            session.current_dir = dir;
            send_reply(writer, RESPONSE_OPERATION_SUCCESSFUL.as_bytes()).await?;
        }
        None => {
            debug!(
                "CWD rejected: {:?} does not resolve to a directory inside the sandbox",
                target
            );
            send_reply(writer, RESPONSE_OPEN_FAILED.as_bytes()).await?;
        }
    }
    Ok(SessionFlow::Continue)
}
