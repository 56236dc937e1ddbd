use super::alphabet::{ALPHABET_94, Alphabet};
use crate::encoders::algorithms::errors::{AlphabetNotFoundError, find_closest_alphabet};
use serde::Deserialize;
use std::collections::HashMap;

/// Configuration for a single named alphabet loaded from TOML.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct AlphabetConfig {
    /// The characters comprising the alphabet (explicit list)
    #[serde(default)]
    pub chars: String,
    /// Length of a prefix of the 94-character alphabet, used when `chars` is empty
    #[serde(default)]
    pub prefix: Option<usize>,
    /// One-line description shown by `list`
    #[serde(default)]
    pub description: Option<String>,
}

impl AlphabetConfig {
    /// Returns the effective character set.
    ///
    /// Priority:
    /// 1. If `chars` is non-empty, use it directly
    /// 2. If `prefix` is set, take that many characters of [`ALPHABET_94`]
    pub fn effective_chars(&self) -> Result<String, String> {
        if !self.chars.is_empty() {
            return Ok(self.chars.clone());
        }

        match self.prefix {
            Some(len) if (2..=ALPHABET_94.len()).contains(&len) => {
                Ok(ALPHABET_94[..len].to_string())
            }
            Some(len) => Err(format!(
                "prefix must be between 2 and {}, got {}",
                ALPHABET_94.len(),
                len
            )),
            None => Err("alphabet needs either `chars` or `prefix`".to_string()),
        }
    }

    /// Validates the configuration and builds the alphabet.
    pub fn build(&self) -> Result<Alphabet, Box<dyn std::error::Error>> {
        let chars = self
            .effective_chars()
            .map_err(|e| format!("Invalid alphabet config: {}", e))?;
        Ok(Alphabet::new(&chars)?)
    }
}

/// Collection of alphabet configurations loaded from TOML files.
#[derive(Debug, Deserialize, Default)]
pub struct AlphabetRegistry {
    /// Map of alphabet names to their configurations
    #[serde(default)]
    pub alphabets: HashMap<String, AlphabetConfig>,
    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Global settings for base-k.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    /// Alphabet used when none is named on the command line
    #[serde(default)]
    pub default_alphabet: Option<String>,
}

impl AlphabetRegistry {
    /// Parses alphabet configurations from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in alphabet configurations.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../alphabets.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in alphabets (from library)
    /// 2. `~/.config/base-k/alphabets.toml` (user overrides)
    /// 3. `./alphabets.toml` (project-local overrides)
    ///
    /// Later configurations override earlier ones for matching alphabet names.
    /// Override files that fail to load are reported on stderr unless `quiet`.
    pub fn load_with_overrides(quiet: bool) -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("base-k").join("alphabets.toml");
            config.merge_file(&user_config_path, "user", quiet);
        }

        config.merge_file(std::path::Path::new("alphabets.toml"), "local", quiet);

        Ok(config)
    }

    fn merge_file(&mut self, path: &std::path::Path, origin: &str, quiet: bool) {
        if !path.exists() {
            return;
        }
        match Self::load_from_file(path) {
            Ok(other) => self.merge(other),
            Err(e) => {
                if !quiet {
                    eprintln!(
                        "Warning: Failed to load {} config from {:?}: {}",
                        origin, path, e
                    );
                }
            }
        }
    }

    /// Merges another configuration into this one.
    ///
    /// Alphabets from `other` override alphabets with the same name in `self`,
    /// and a default alphabet set in `other` replaces this one.
    pub fn merge(&mut self, other: AlphabetRegistry) {
        self.alphabets.extend(other.alphabets);
        if other.settings.default_alphabet.is_some() {
            self.settings.default_alphabet = other.settings.default_alphabet;
        }
    }

    /// Retrieves an alphabet configuration by name.
    pub fn get_alphabet(&self, name: &str) -> Option<&AlphabetConfig> {
        self.alphabets.get(name)
    }

    /// All alphabet names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.alphabets.keys().cloned().collect();
        names.sort();
        names
    }

    /// Builds a named alphabet, suggesting a close name when it is unknown.
    pub fn build_alphabet(&self, name: &str) -> Result<Alphabet, Box<dyn std::error::Error>> {
        let alphabet_config = self.get_alphabet(name).ok_or_else(|| {
            let suggestion = find_closest_alphabet(name, &self.names());
            AlphabetNotFoundError::new(name, suggestion)
        })?;
        alphabet_config
            .build()
            .map_err(|e| format!("Alphabet '{}': {}", name, e).into())
    }

    /// The configured default alphabet name, falling back to `base85`.
    pub fn default_alphabet(&self) -> &str {
        self.settings
            .default_alphabet
            .as_deref()
            .unwrap_or("base85")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_config() {
        let config = AlphabetRegistry::load_default().unwrap();
        assert!(config.alphabets.contains_key("base85"));
        assert!(config.alphabets.contains_key("base94"));
        assert_eq!(config.default_alphabet(), "base85");
    }

    #[test]
    fn test_every_builtin_alphabet_builds() {
        let config = AlphabetRegistry::load_default().unwrap();
        for name in config.names() {
            let alphabet = config.build_alphabet(&name).unwrap();
            let digits: String = name
                .trim_start_matches("base")
                .chars()
                .take_while(|c| c.is_ascii_digit())
                .collect();
            let expected: usize = digits.parse().unwrap();
            assert_eq!(alphabet.base(), expected, "{}", name);
        }
    }

    #[test]
    fn test_base58_skips_lookalikes() {
        let config = AlphabetRegistry::load_default().unwrap();
        let base58 = config.build_alphabet("base58").unwrap();
        for c in ['0', 'O', 'I', 'l'] {
            assert_eq!(base58.decode_char(c), None);
        }
    }

    #[test]
    fn test_effective_chars_priority() {
        let explicit = AlphabetConfig {
            chars: "xyz".to_string(),
            prefix: Some(10),
            description: None,
        };
        assert_eq!(explicit.effective_chars().unwrap(), "xyz");

        let prefix = AlphabetConfig {
            prefix: Some(10),
            ..Default::default()
        };
        assert_eq!(prefix.effective_chars().unwrap(), "0123456789");

        let too_long = AlphabetConfig {
            prefix: Some(95),
            ..Default::default()
        };
        assert!(too_long.effective_chars().unwrap_err().contains("got 95"));

        assert!(AlphabetConfig::default().effective_chars().is_err());
    }

    #[test]
    fn test_invalid_chars_fail_to_build() {
        let config = AlphabetRegistry::from_toml(
            r#"
            [alphabets.broken]
            chars = "abca"
            "#,
        )
        .unwrap();
        let err = config.build_alphabet("broken").unwrap_err();
        assert!(err.to_string().contains("repeated character 'a'"));
    }

    #[test]
    fn test_unknown_alphabet_suggests() {
        let config = AlphabetRegistry::load_default().unwrap();
        let err = config.build_alphabet("base86").unwrap_err();
        let not_found = err.downcast_ref::<AlphabetNotFoundError>().unwrap();
        assert_eq!(not_found.name, "base86");
        assert!(not_found.suggestion.is_some());
    }

    #[test]
    fn test_merge_configs() {
        let mut config1 = AlphabetRegistry::from_toml(
            r#"
            [alphabets.test1]
            chars = "ABC"
            "#,
        )
        .unwrap();

        let config2 = AlphabetRegistry::from_toml(
            r#"
            [settings]
            default_alphabet = "test2"

            [alphabets.test1]
            chars = "DEF"

            [alphabets.test2]
            prefix = 36
            "#,
        )
        .unwrap();

        config1.merge(config2);

        assert_eq!(config1.alphabets.len(), 2);
        assert_eq!(config1.get_alphabet("test1").unwrap().chars, "DEF");
        assert_eq!(config1.default_alphabet(), "test2");
        assert_eq!(config1.build_alphabet("test2").unwrap().base(), 36);
    }

    #[test]
    fn test_merge_keeps_default_when_unset() {
        let mut config = AlphabetRegistry::load_default().unwrap();
        config.merge(AlphabetRegistry::default());
        assert_eq!(config.default_alphabet(), "base85");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        std::io::Write::write_all(
            &mut file,
            b"[alphabets.dna]\nchars = \"ACGT\"\ndescription = \"nucleotides\"\n",
        )
        .unwrap();

        let config = AlphabetRegistry::load_from_file(file.path()).unwrap();
        let dna = config.get_alphabet("dna").unwrap();
        assert_eq!(dna.description.as_deref(), Some("nucleotides"));
        assert_eq!(config.build_alphabet("dna").unwrap().base(), 4);
    }
}
