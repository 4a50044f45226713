use std::path::Path;

use tracing::warn;

use crate::error::ConfigError;

/// Longest artificial pause before the computer moves.
const MAX_BOT_DELAY_MS: u64 = 10_000;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub players: PlayersConfig,
    pub bot: BotConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    /// Fixed number of human players (1 or 2). Asked at startup when unset.
    pub count: Option<u8>,
    /// Names used when a player leaves the name prompt blank.
    pub default_names: [String; 2],
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            count: None,
            default_names: ["Player 1".to_string(), "Player 2".to_string()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BotConfig {
    pub name: String,
    /// Cosmetic pause before each computer move, in milliseconds.
    pub delay_ms: u64,
    /// Seed for the computer's column choice. Random per run when unset.
    pub seed: Option<u64>,
}

impl Default for BotConfig {
    fn default() -> Self {
        BotConfig {
            name: "Computer".to_string(),
            delay_ms: 500,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
    pub clear_screen: bool,
    pub empty_glyph: char,
    pub x_glyph: char,
    pub o_glyph: char,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            color: true,
            clear_screen: true,
            empty_glyph: '*',
            x_glyph: 'x',
            o_glyph: 'o',
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(count) = self.players.count {
            if !(1..=2).contains(&count) {
                return Err(ConfigError::Validation(
                    "players.count must be 1 or 2".into(),
                ));
            }
        }
        if self.players.default_names.iter().any(|name| name.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "players.default_names must not be blank".into(),
            ));
        }
        if self.bot.name.trim().is_empty() {
            return Err(ConfigError::Validation("bot.name must not be blank".into()));
        }
        if self.bot.delay_ms > MAX_BOT_DELAY_MS {
            return Err(ConfigError::Validation(format!(
                "bot.delay_ms must be <= {MAX_BOT_DELAY_MS}"
            )));
        }

        let glyphs = [
            self.display.empty_glyph,
            self.display.x_glyph,
            self.display.o_glyph,
        ];
        if glyphs.iter().any(|glyph| glyph.is_whitespace()) {
            return Err(ConfigError::Validation(
                "display glyphs must not be whitespace".into(),
            ));
        }
        if glyphs[0] == glyphs[1] || glyphs[0] == glyphs[2] || glyphs[1] == glyphs[2] {
            return Err(ConfigError::Validation(
                "display.empty_glyph, display.x_glyph and display.o_glyph must differ".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
