pub const DEFAULT_INPUT: &str = "awords.txt";
pub const DEFAULT_OUTPUT: &str = "awords.js";
pub const DEFAULT_NAME: &str = "awords";

/// Environment variable overriding the verbosity flags.
pub const LOG_ENV: &str = "WORDLIT_LOG";
