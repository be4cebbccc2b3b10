// src/constants.rs

/// Reply sent on the control channel right after a connection is accepted.
pub const WELCOME_BANNER: &str = "220 Welcome.\r\n";

pub const RESPONSE_OPERATION_SUCCESSFUL: &str = "226 Operation successful\r\n";
pub const RESPONSE_TRANSFER_STARTING: &str = "150 About to start data transfer.\r\n";
pub const RESPONSE_GOODBYE: &str = "221 Goodbye.\r\n";
pub const RESPONSE_SYNTAX_ERROR: &str = "500 Syntax error, command unrecognized.\r\n";
pub const RESPONSE_PASSIVE_DISABLED: &str = "500 Passive mode is disabled\r\n";
pub const RESPONSE_OPEN_FAILED: &str = "550 Couldn't open the file or directory\r\n";
