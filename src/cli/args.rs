use clap::Args;
use std::path::PathBuf;

/// Arguments for encoding data
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Named alphabet to encode with (default from config, normally base85)
    pub alphabet: Option<String>,

    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Use these characters as the alphabet instead of a named one
    #[arg(long, value_name = "CHARS", conflicts_with = "alphabet")]
    pub chars: Option<String>,

    /// Wrap output lines at this many characters (0 = no wrapping)
    #[arg(short = 'w', long, value_name = "COLS", default_value_t = 0)]
    pub wrap: usize,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for decoding data
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Named alphabet to decode from (default from config, normally base85)
    pub alphabet: Option<String>,

    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Use these characters as the alphabet instead of a named one
    #[arg(long, value_name = "CHARS", conflicts_with = "alphabet")]
    pub chars: Option<String>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for listing alphabets
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for describing an alphabet
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Named alphabet to describe (default from config, normally base85)
    pub alphabet: Option<String>,

    /// Describe these characters instead of a named alphabet
    #[arg(long, value_name = "CHARS", conflicts_with = "alphabet")]
    pub chars: Option<String>,
}
