use crate::cli::{
    args::DecodeArgs,
    config::{read_input, resolve_alphabet},
    global::GlobalArgs,
};
use base_k::AlphabetRegistry;
use std::fs;
use std::io::{self, Write};

pub fn handle(
    args: DecodeArgs,
    global: &GlobalArgs,
    config: &AlphabetRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let alphabet = resolve_alphabet(config, args.alphabet.as_deref(), args.chars.as_deref())?;
    let input = read_input(args.file.as_deref(), global)?;
    let text = String::from_utf8(input)
        .map_err(|_| "Input data is not valid UTF-8 text for decoding")?;

    // Line breaks and indentation from wrapping are not part of the encoding
    let data = base_k::decode(&base_k::strip_whitespace(&text), &alphabet)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &data)?;
    } else {
        let mut stdout = io::stdout().lock();
        stdout.write_all(&data)?;
        stdout.flush()?;
    }

    Ok(())
}
