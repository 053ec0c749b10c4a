use clap::{Parser, Subcommand};
use palindrome_types::DEFAULT_MAX_LENGTH;

#[derive(Parser, Debug)]
#[command(name = "palindrome-demo")]
#[command(about = "Check whether text reads the same forwards and backwards", long_about = None)]
pub struct Cli {
    /// Log every check at debug level (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the verdict for each built-in sample string
    Samples,

    /// Check text, ignoring case, spaces and punctuation
    Check {
        /// Text to check
        #[arg(required = true)]
        texts: Vec<String>,
    },

    /// Check text under a length limit, ignoring only case and spaces
    Secure {
        /// Maximum accepted input length in characters
        #[arg(long, default_value_t = DEFAULT_MAX_LENGTH)]
        max_length: usize,

        /// Text to check
        #[arg(required = true)]
        texts: Vec<String>,
    },

    /// Parse each argument as JSON and check it if it is a string
    Json {
        /// Maximum accepted input length in characters
        #[arg(long, default_value_t = DEFAULT_MAX_LENGTH)]
        max_length: usize,

        /// JSON values, e.g. '"racecar"' or 12321
        #[arg(required = true)]
        values: Vec<String>,
    },

    /// Run the input validation scenarios
    Security,
}
