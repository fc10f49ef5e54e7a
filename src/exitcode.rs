//! Standard exit codes (BSD sysexits.h compatible)

/// Successful termination
pub const OK: i32 = 0;

/// Command line usage error (unknown verb, malformed or unbindable arguments)
pub const USAGE: i32 = 64;

/// Internal software error (command setup or handler failure)
pub const SOFTWARE: i32 = 70;

/// Configuration error
pub const CONFIG: i32 = 78;
