use crate::cli::{
    args::EncodeArgs,
    config::{read_input, resolve_alphabet},
    global::GlobalArgs,
};
use base_k::AlphabetRegistry;
use std::fs;

pub fn handle(
    args: EncodeArgs,
    global: &GlobalArgs,
    config: &AlphabetRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let alphabet = resolve_alphabet(config, args.alphabet.as_deref(), args.chars.as_deref())?;
    let data = read_input(args.file.as_deref(), global)?;

    let encoded = base_k::wrap(&base_k::encode(&data, &alphabet), args.wrap);

    if let Some(output_path) = &args.output {
        fs::write(output_path, encoded.as_bytes())?;
    } else {
        println!("{}", encoded);
    }

    Ok(())
}
