use crate::cli::{args::ListArgs, global::GlobalArgs};
use base_k::AlphabetRegistry;

pub fn handle(
    args: ListArgs,
    _global: &GlobalArgs,
    config: &AlphabetRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let default = config.default_alphabet();
    let mut entries = Vec::new();
    for name in config.names() {
        let Some(alphabet_config) = config.get_alphabet(&name) else {
            continue;
        };
        // Broken user entries are listed with their error instead of aborting
        let chars = alphabet_config.effective_chars();
        entries.push((name, chars, alphabet_config.description.clone()));
    }

    if args.json {
        let output: Vec<_> = entries
            .iter()
            .map(|(name, chars, description)| match chars {
                Ok(chars) => serde_json::json!({
                    "name": name,
                    "base": chars.chars().count(),
                    "chars": chars,
                    "description": description,
                    "default": name == default,
                }),
                Err(e) => serde_json::json!({
                    "name": name,
                    "error": e,
                }),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Available alphabets:\n");
    for (name, chars, description) in &entries {
        let marker = if name == default { "*" } else { " " };
        match chars {
            Ok(chars) => {
                let count = chars.chars().count();
                let preview: String = chars.chars().take(20).collect();
                let suffix = if count > 20 { "..." } else { "" };
                println!(
                    "{} {:<12} base-{:<3}  {:<23}  {}",
                    marker,
                    name,
                    count,
                    format!("{}{}", preview, suffix),
                    description.as_deref().unwrap_or("")
                );
            }
            Err(e) => println!("{} {:<12} (invalid: {})", marker, name, e),
        }
    }
    Ok(())
}
