use crate::core_ftpcommand::error::CommandError;
use crate::core_ftpcommand::handlers::SessionFlow;
use crate::helpers::send_reply;
use tokio::net::tcp::OwnedWriteHalf;

const HELP_TEXT: &str = "214\r\n\
CDUP Changes the working directory on the remote host to the parent of the current directory.\r\n\
CWD  [directory path] Change the working directory to the one specified in the argument.\r\n\
HELP Displays help information.\r\n\
LIST Send the list of files in the working directory to the passive data channel.\r\n\
PASV Get the data channel's port.\r\n\
PWD  Get current working directory.\r\n\
QUIT Terminate connection.\r\n\
RETR [file name] Send a copy of the file with the specified path name to the passive data channel.\r\n\
\r\n";

/// Handles the HELP command: static multi-line command summary.
pub async fn handle_help_command(
    writer: &mut OwnedWriteHalf,
) -> Result<SessionFlow, CommandError> {
    send_reply(writer, HELP_TEXT.as_bytes()).await?;
    Ok(SessionFlow::Continue)
}
