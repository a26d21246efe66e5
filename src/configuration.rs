use crate::{cli::Opts, hash::HashAlgorithm};
use base58::Scheme;
use log::LevelFilter;
use std::env;
use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("invalid combination of options")]
    DecodeWithHash,
    #[error("invalid hash algorithm '{0}'")]
    InvalidHashAlgorithm(String),
    #[error("invalid {key} '{value}'")]
    InvalidVariable { key: String, value: String },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Mode {
    Encode { hash: Option<HashAlgorithm> },
    Decode,
}

#[derive(Debug, Clone)]
pub struct Configuration {
    mode: Mode,
    scheme: Scheme,
    log_level: LevelFilter,
}

const LOG_LEVEL_VARIABLE: &str = "BASE58_LOG_LEVEL";

fn var(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn var_map<T>(key: &str, value: Option<String>, f: impl FnOnce(&str) -> Option<T>, default: T) -> Result<T, ConfigurationError> {
    match value {
        Some(value) => f(&value).ok_or(ConfigurationError::InvalidVariable { key: key.to_owned(), value }),
        None => Ok(default),
    }
}

impl Configuration {
    pub fn new(opts: &Opts) -> Result<Self, ConfigurationError> {
        Self::from_parts(opts, var(LOG_LEVEL_VARIABLE))
    }

    fn from_parts(opts: &Opts, log_level: Option<String>) -> Result<Self, ConfigurationError> {
        if opts.decode && opts.hash.is_some() {
            return Err(ConfigurationError::DecodeWithHash);
        }
        let mode = if opts.decode {
            Mode::Decode
        } else {
            let hash = match &opts.hash {
                Some(name) => Some(
                    name.parse::<HashAlgorithm>()
                        .map_err(|error| ConfigurationError::InvalidHashAlgorithm(error.0))?,
                ),
                None => None,
            };
            Mode::Encode { hash }
        };
        let scheme = if opts.fixed { Scheme::Fixed } else { Scheme::Bitcoin };
        let log_level = var_map(LOG_LEVEL_VARIABLE, log_level, |level| level.parse().ok(), LevelFilter::Warn)?;
        Ok(Self { mode, scheme, log_level })
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }
}
