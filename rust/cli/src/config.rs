use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub trials: u64,
    pub seed: Option<u64>,
    pub tolerance: f64,
    pub precision: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub trials: ValueSource,
    pub seed: ValueSource,
    pub tolerance: ValueSource,
    pub precision: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            trials: ValueSource::Default,
            seed: ValueSource::Default,
            tolerance: ValueSource::Default,
            precision: ValueSource::Default,
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
            trials: 1_000_000,
            seed: None,
            tolerance: 0.01,
            precision: 6,
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
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("ROYALE_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.trials {
            cfg.trials = v;
            sources.trials = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.tolerance {
            cfg.tolerance = v;
            sources.tolerance = ValueSource::File;
        }
        if let Some(v) = f.precision {
            cfg.precision = v;
            sources.precision = ValueSource::File;
        }
    }

    if let Ok(trials) = std::env::var("ROYALE_TRIALS")
        && !trials.is_empty()
    {
        cfg.trials = trials
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid trials".into()))?;
        sources.trials = ValueSource::Env;
    }
    if let Ok(seed) = std::env::var("ROYALE_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(tol) = std::env::var("ROYALE_TOLERANCE")
        && !tol.is_empty()
    {
        cfg.tolerance = tol
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid tolerance".into()))?;
        sources.tolerance = ValueSource::Env;
    }
    if let Ok(precision) = std::env::var("ROYALE_PRECISION")
        && !precision.is_empty()
    {
        cfg.precision = precision
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid precision".into()))?;
        sources.precision = ValueSource::Env;
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
    trials: Option<u64>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    tolerance: Option<f64>,
    #[serde(default)]
    precision: Option<usize>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.trials == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: trials must be >=1".into(),
        ));
    }
    if !(cfg.tolerance > 0.0 && cfg.tolerance <= 1.0) {
        return Err(ConfigError::Invalid(
            "Invalid configuration: tolerance must be in (0, 1]".into(),
        ));
    }
    if cfg.precision > 17 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: precision must be <=17".into(),
        ));
    }
    Ok(())
}
