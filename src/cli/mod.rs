mod args;
mod config;
mod global;
mod handlers;

use args::{DecodeArgs, EncodeArgs, InfoArgs, ListArgs};
use base_k::{AlphabetNotFoundError, DecodeError};
use clap::{Parser, Subcommand};
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "base-k")]
#[command(version)]
#[command(about = "Arbitrary-radix encoder: turn bytes into text over any ASCII alphabet of 2 to 255 symbols", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode binary data as text
    Encode(EncodeArgs),
    /// Decode text back to binary data
    Decode(DecodeArgs),
    /// List available alphabets
    List(ListArgs),
    /// Show the parameters of an alphabet
    Info(InfoArgs),
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.global.no_color {
        // Error renderers read NO_COLOR. Nothing else runs yet, so this is
        // still single-threaded.
        unsafe {
            std::env::set_var("NO_COLOR", "1");
        }
    }

    let config = config::load_registry(&cli.global)?;

    match cli.command {
        Commands::Encode(args) => handlers::encode::handle(args, &cli.global, &config),
        Commands::Decode(args) => handlers::decode::handle(args, &cli.global, &config),
        Commands::List(args) => handlers::list::handle(args, &cli.global, &config),
        Commands::Info(args) => handlers::info::handle(args, &cli.global, &config),
    }
}

/// Prints an error the way the library formats it, adding a header to plain messages.
pub fn report(err: &(dyn std::error::Error + 'static)) {
    if err.is::<DecodeError>() || err.is::<AlphabetNotFoundError>() {
        eprintln!("{}", err);
    } else {
        eprintln!("error: {}", err);
    }
}
