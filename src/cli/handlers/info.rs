use crate::cli::{args::InfoArgs, config::resolve_alphabet, global::GlobalArgs};
use base_k::{AlphabetRegistry, PlaceValues};

pub fn handle(
    args: InfoArgs,
    _global: &GlobalArgs,
    config: &AlphabetRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let alphabet = resolve_alphabet(config, args.alphabet.as_deref(), args.chars.as_deref())?;
    let place_values = PlaceValues::for_base(alphabet.base());
    let bits = (alphabet.base() as f64).log2();

    match (&args.chars, &args.alphabet) {
        (Some(_), _) => println!("Alphabet: (custom)"),
        (None, Some(name)) => println!("Alphabet: {}", name),
        (None, None) => println!("Alphabet: {} (default)", config.default_alphabet()),
    }
    println!("  Base: {}", alphabet.base());
    println!("  Characters: {}", alphabet);
    println!("  Bits per character: {:.4}", bits);
    println!("  Characters per byte: {:.4}", place_values.size_factor());
    println!("  Interval digits: {}", place_values.precision());
    println!("  Interval modulus: {}", place_values.modulus());

    Ok(())
}
