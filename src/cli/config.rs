use super::global::GlobalArgs;
use base_k::{Alphabet, AlphabetRegistry};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Expands `~` in a user-supplied path and checks that it exists.
fn expand_config_path(path: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let expanded = shellexpand::tilde(path);
    let path_buf = PathBuf::from(expanded.as_ref());
    if !path_buf.is_file() {
        return Err(format!("Cannot access config file '{}'", path).into());
    }
    Ok(path_buf)
}

/// Loads built-in alphabets, standard overrides, then `--config` if given.
pub fn load_registry(global: &GlobalArgs) -> Result<AlphabetRegistry, Box<dyn std::error::Error>> {
    let mut registry = AlphabetRegistry::load_with_overrides(global.quiet)?;

    if let Some(path) = &global.config {
        let path = expand_config_path(path)?;
        let extra = AlphabetRegistry::load_from_file(&path)
            .map_err(|e| format!("Failed to load config from {:?}: {}", path, e))?;
        registry.merge(extra);
    }

    Ok(registry)
}

/// Helper function to pick the alphabet from `--chars`, a name, or the default
pub fn resolve_alphabet(
    registry: &AlphabetRegistry,
    name: Option<&str>,
    chars: Option<&str>,
) -> Result<Alphabet, Box<dyn std::error::Error>> {
    if let Some(chars) = chars {
        return Alphabet::new(chars).map_err(|e| format!("Invalid alphabet: {}", e).into());
    }
    let name = name.unwrap_or_else(|| registry.default_alphabet());
    registry.build_alphabet(name)
}

/// Reads a file or stdin, enforcing `--max-size` unless `--force` is given.
pub fn read_input(
    file: Option<&Path>,
    global: &GlobalArgs,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    if let Some(file_path) = file {
        // Check file size if max_size is set
        if global.max_size > 0 {
            let file_size = fs::metadata(file_path)?.len() as usize;

            if file_size > global.max_size {
                if global.force {
                    if !global.quiet {
                        eprintln!(
                            "Warning: Processing large file ({} bytes, limit: {} bytes)",
                            file_size, global.max_size
                        );
                    }
                } else {
                    return Err(format!(
                        "File size ({} bytes) exceeds limit ({} bytes). Use --force to process anyway.",
                        file_size, global.max_size
                    )
                    .into());
                }
            }
        }

        return Ok(fs::read(file_path)?);
    }

    let mut buffer = Vec::new();
    io::stdin().read_to_end(&mut buffer)?;

    // Check stdin size after reading
    if global.max_size > 0 && buffer.len() > global.max_size && !global.force {
        return Err(format!(
            "Input size ({} bytes) exceeds maximum ({} bytes). Use --force to process anyway.",
            buffer.len(),
            global.max_size
        )
        .into());
    }

    Ok(buffer)
}
