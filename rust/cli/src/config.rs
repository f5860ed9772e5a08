use serde::{Deserialize, Serialize};
use std::fs;

use crate::cli::GameArgs;

/// Default rule file, resolved against the working directory.
pub const DEFAULT_RULES_PATH: &str = "victories.toml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub rules: String,
    pub seed: Option<u64>,
    pub window: usize,
    pub opponent: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Flag,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub rules: ValueSource,
    pub seed: ValueSource,
    pub window: ValueSource,
    pub opponent: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            rules: ValueSource::Default,
            seed: ValueSource::Default,
            window: ValueSource::Default,
            opponent: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rules: DEFAULT_RULES_PATH.into(),
            seed: None,
            window: 5,
            opponent: "adaptive".into(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

/// Resolve configuration from file and environment only.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    load_with_overrides(&GameArgs::default())
}

/// Resolve configuration with precedence flag > env > file > default.
pub fn load_with_overrides(args: &GameArgs) -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("RPSLS_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.rules {
            cfg.rules = v;
            sources.rules = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.window {
            cfg.window = v;
            sources.window = ValueSource::File;
        }
        if let Some(v) = f.opponent {
            cfg.opponent = v;
            sources.opponent = ValueSource::File;
        }
    }

    if let Ok(rules) = std::env::var("RPSLS_RULES")
        && !rules.is_empty()
    {
        cfg.rules = rules;
        sources.rules = ValueSource::Env;
    }
    if let Ok(seed) = std::env::var("RPSLS_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(window) = std::env::var("RPSLS_WINDOW")
        && !window.is_empty()
    {
        cfg.window = window
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid window".into()))?;
        sources.window = ValueSource::Env;
    }
    if let Ok(opponent) = std::env::var("RPSLS_OPPONENT")
        && !opponent.is_empty()
    {
        cfg.opponent = opponent.to_ascii_lowercase();
        sources.opponent = ValueSource::Env;
    }

    if let Some(rules) = &args.rules {
        cfg.rules = rules.clone();
        sources.rules = ValueSource::Flag;
    }
    if let Some(seed) = args.seed {
        cfg.seed = Some(seed);
        sources.seed = ValueSource::Flag;
    }
    if let Some(window) = args.window {
        cfg.window = window as usize;
        sources.window = ValueSource::Flag;
    }
    if let Some(opponent) = args.opponent {
        cfg.opponent = opponent.as_str().to_string();
        sources.opponent = ValueSource::Flag;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    rules: Option<String>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    window: Option<usize>,
    #[serde(default)]
    opponent: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.window == 0 {
        return Err(ConfigError::Invalid(
            "window must be >=1".into(),
        ));
    }
    if cfg.rules.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "rules path must not be empty".into(),
        ));
    }
    if !rpsls_ai::OPPONENT_KINDS.contains(&cfg.opponent.as_str()) {
        return Err(ConfigError::Invalid(format!(
            "unknown opponent '{}' (expected one of {})",
            cfg.opponent,
            rpsls_ai::OPPONENT_KINDS.join(", ")
        )));
    }
    Ok(())
}
