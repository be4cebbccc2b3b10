use std::fmt;

/// The closed set of control-channel commands this server understands.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FtpCommand {
    CDUP,
    CWD,
    HELP,
    LIST,
    PASV,
    PWD,
    QUIT,
    RETR,
}

impl FtpCommand {
    /// Maps an already upper-cased command token to its command.
    pub fn from_token(token: &str) -> Option<FtpCommand> {
        match token {
            "CDUP" => Some(FtpCommand::CDUP),
            "CWD" => Some(FtpCommand::CWD),
            "HELP" => Some(FtpCommand::HELP),
            "LIST" => Some(FtpCommand::LIST),
            "PASV" => Some(FtpCommand::PASV),
            "PWD" => Some(FtpCommand::PWD),
            "QUIT" => Some(FtpCommand::QUIT),
            "RETR" => Some(FtpCommand::RETR),
            _ => None,
        }
    }
}

impl fmt::Display for FtpCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FtpCommand::CDUP => "CDUP",
            FtpCommand::CWD => "CWD",
            FtpCommand::HELP => "HELP",
            FtpCommand::LIST => "LIST",
            FtpCommand::PASV => "PASV",
            FtpCommand::PWD => "PWD",
            FtpCommand::QUIT => "QUIT",
            FtpCommand::RETR => "RETR",
        };
        f.write_str(name)
    }
}

/// Splits a raw control-channel line into its command token and argument.
///
/// The token is the first four characters of the line, trimmed and
/// upper-cased; the argument is everything after them, trimmed, with an
/// empty remainder treated as no argument.
pub fn parse_command_line(line: &str) -> (String, Option<String>) {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let split = line
        .char_indices()
        .nth(4)
        .map(|(index, _)| index)
        .unwrap_or(line.len());
    let token = line[..split].trim().to_ascii_uppercase();
    let argument = line[split..].trim();
    let argument = (!argument.is_empty()).then(|| argument.to_string());
    (token, argument)
}
