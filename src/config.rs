// src/config.rs

use std::{fmt, path::PathBuf};
use url::Url;

use crate::error::ConfigError;

/// Resource path the presentation layer serves the dataset under.
pub const DEFAULT_RESOURCE_PATH: &str = "/dados.csv";

/// Origin the resource path is resolved against when nothing else is set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/";

pub const ENV_SOURCE: &str = "TABULAR_SOURCE";
pub const ENV_BASE_URL: &str = "TABULAR_BASE_URL";
pub const ENV_PATH: &str = "TABULAR_PATH";
pub const ENV_DELIMITER: &str = "TABULAR_DELIMITER";
pub const ENV_STRICT: &str = "TABULAR_STRICT";

/// Where the document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Http(Url),
    File(PathBuf),
}

impl Source {
    /// Accepts `http(s)://` and `file://` URLs, or a bare filesystem path.
    pub fn parse(input: &str) -> Result<Self, ConfigError> {
        match Url::parse(input) {
            Ok(url) => match url.scheme() {
                "http" | "https" => Ok(Source::Http(url)),
                "file" => url
                    .to_file_path()
                    .map(Source::File)
                    .map_err(|_| ConfigError::NotAFilePath(input.to_string())),
                // `C:\data.csv` parses with a one-letter scheme
                s if s.len() == 1 => Ok(Source::File(PathBuf::from(input))),
                s => Err(ConfigError::UnsupportedScheme(s.to_string())),
            },
            Err(url::ParseError::RelativeUrlWithoutBase) => Ok(Source::File(PathBuf::from(input))),
            Err(source) => Err(ConfigError::InvalidUrl {
                input: input.to_string(),
                source,
            }),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Http(url) => write!(f, "{}", url),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Parser settings. Every knob is pinned so the same bytes always give the
/// same dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub delimiter: u8,
    pub quote: u8,
    /// Accept rows whose field count differs from the header.
    pub flexible: bool,
    /// Trim surrounding whitespace from headers and fields.
    pub trim: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            delimiter: b',',
            quote: b'"',
            flexible: true,
            trim: false,
        }
    }
}

impl ParseOptions {
    /// Reject rows whose length differs from the header.
    pub fn strict(mut self) -> Self {
        self.flexible = false;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    pub source: Source,
    pub options: ParseOptions,
}

impl LoaderConfig {
    pub fn new(source: Source) -> Self {
        LoaderConfig {
            source,
            options: ParseOptions::default(),
        }
    }

    /// Resolve `path` against `base` the way a browser resolves a relative fetch.
    pub fn from_base_url(base: &str, path: &str) -> Result<Self, ConfigError> {
        let base_url = Url::parse(base).map_err(|source| ConfigError::InvalidUrl {
            input: base.to_string(),
            source,
        })?;
        let url = base_url
            .join(path)
            .map_err(|source| ConfigError::InvalidUrl {
                input: path.to_string(),
                source,
            })?;
        match url.scheme() {
            "http" | "https" => Ok(Self::new(Source::Http(url))),
            s => Err(ConfigError::UnsupportedScheme(s.to_string())),
        }
    }

    pub fn with_options(mut self, options: ParseOptions) -> Self {
        self.options = options;
        self
    }

    /// Build from `TABULAR_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match lookup(ENV_SOURCE).filter(|s| !s.is_empty()) {
            Some(src) => Self::new(Source::parse(&src)?),
            None => {
                let base = lookup(ENV_BASE_URL).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
                let path = lookup(ENV_PATH).unwrap_or_else(|| DEFAULT_RESOURCE_PATH.to_string());
                Self::from_base_url(&base, &path)?
            }
        };

        if let Some(raw) = lookup(ENV_DELIMITER) {
            config.options.delimiter = parse_delimiter(&raw)?;
        }
        if let Some(raw) = lookup(ENV_STRICT) {
            let on = matches!(raw.trim().to_ascii_lowercase().as_str(), "1" | "true");
            config.options.flexible = !on;
        }

        Ok(config)
    }
}

fn parse_delimiter(raw: &str) -> Result<u8, ConfigError> {
    if raw == "\\t" {
        return Ok(b'\t');
    }
    match raw.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => Err(ConfigError::InvalidDelimiter(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_resolve_resource_path() {
        let config = LoaderConfig::from_lookup(env(&[])).unwrap();
        assert_eq!(
            config.source,
            Source::Http(Url::parse("http://localhost:8080/dados.csv").unwrap())
        );
        assert_eq!(config.options, ParseOptions::default());
    }

    #[test]
    fn test_absolute_path_replaces_base_path() {
        let config = LoaderConfig::from_base_url("https://example.org/app/view/", "/dados.csv").unwrap();
        assert_eq!(config.source.to_string(), "https://example.org/dados.csv");

        let config = LoaderConfig::from_base_url("https://example.org/app/view/", "dados.csv").unwrap();
        assert_eq!(config.source.to_string(), "https://example.org/app/view/dados.csv");
    }

    #[test]
    fn test_source_env_overrides_base() {
        let config = LoaderConfig::from_lookup(env(&[
            (ENV_SOURCE, "/tmp/rows.csv"),
            (ENV_BASE_URL, "http://ignored/"),
        ]))
        .unwrap();
        assert_eq!(config.source, Source::File(PathBuf::from("/tmp/rows.csv")));
    }

    #[test]
    fn test_parse_options_from_env() {
        let config = LoaderConfig::from_lookup(env(&[
            (ENV_DELIMITER, ";"),
            (ENV_STRICT, "True"),
        ]))
        .unwrap();
        assert_eq!(config.options.delimiter, b';');
        assert!(!config.options.flexible);

        let config = LoaderConfig::from_lookup(env(&[(ENV_DELIMITER, "\\t")])).unwrap();
        assert_eq!(config.options.delimiter, b'\t');
    }

    #[test]
    fn test_bad_delimiter_rejected() {
        let err = LoaderConfig::from_lookup(env(&[(ENV_DELIMITER, ";;")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDelimiter(_)));

        let err = LoaderConfig::from_lookup(env(&[(ENV_DELIMITER, "")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDelimiter(_)));
    }

    #[test]
    fn test_strict_only_for_one_or_true() {
        let config = LoaderConfig::from_lookup(env(&[(ENV_STRICT, "yes")])).unwrap();
        assert!(config.options.flexible);

        let config = LoaderConfig::from_lookup(env(&[(ENV_STRICT, "1")])).unwrap();
        assert!(!config.options.flexible);
    }

    #[test]
    fn test_source_parse() {
        assert!(matches!(
            Source::parse("http://host/data.csv").unwrap(),
            Source::Http(_)
        ));
        assert_eq!(
            Source::parse("data/rows.csv").unwrap(),
            Source::File(PathBuf::from("data/rows.csv"))
        );
        assert!(matches!(
            Source::parse("ftp://host/data.csv"),
            Err(ConfigError::UnsupportedScheme(_))
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_file_url_becomes_path() {
        assert_eq!(
            Source::parse("file:///srv/dados.csv").unwrap(),
            Source::File(PathBuf::from("/srv/dados.csv"))
        );
        // remote host in a file url has no local path
        assert!(matches!(
            Source::parse("file://fileserver/share/dados.csv"),
            Err(ConfigError::NotAFilePath(_))
        ));
    }
}
