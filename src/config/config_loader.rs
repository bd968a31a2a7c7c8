use super::types::Config;
use super::ConfigError;
use std::fs;
use std::io::ErrorKind;

pub const DEFAULT_CONFIG_PATH: &str = "config/config.yaml";

/// Where the loaded values came from, reported once logging is up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    File,
    Defaults,
}

/// Loads the YAML config at `config_path` and applies `SERVER_HOST` / `SERVER_PORT`.
///
/// A missing file is not an error: the service runs on defaults.
pub fn load_config(config_path: &str) -> Result<(Config, ConfigSource), ConfigError> {
    load_config_with(config_path, |key| std::env::var(key).ok())
}

pub fn load_config_with<F>(
    config_path: &str,
    lookup: F,
) -> Result<(Config, ConfigSource), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let (config, source) = match fs::read_to_string(config_path) {
        Ok(contents) => (parse_config(&contents)?, ConfigSource::File),
        Err(e) if e.kind() == ErrorKind::NotFound => (Config::default(), ConfigSource::Defaults),
        Err(e) => return Err(e.into()),
    };

    Ok((apply_env_overrides(config, lookup)?, source))
}

pub fn parse_config(contents: &str) -> Result<Config, ConfigError> {
    // serde_yaml rejects an empty document, treat it as "all defaults"
    if contents.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(contents)?)
}

pub fn apply_env_overrides<F>(mut config: Config, lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(host) = lookup("SERVER_HOST") {
        config.server.host = host;
    }

    if let Some(port) = lookup("SERVER_PORT") {
        config.server.port = port
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(format!("SERVER_PORT must be a number, got `{}`", port)))?;
    }

    Ok(config)
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
    fn empty_document_gives_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert!(config.cors.allowed_origins.is_empty());
        assert_eq!(config.logging.log_dir, "logs");
        assert!(config.logging.file_logging);
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let yaml = r#"
server:
  port: 9100
cors:
  allowed_origins:
    - "http://localhost:5173"
"#;
        let config = parse_config(yaml).unwrap();
        assert_eq!(config.server.port, 9100);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.cors.allowed_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.logging.error_log_retention_days, 30);
    }

    #[test]
    fn malformed_document_is_an_error() {
        let err = parse_config("server: [1, 2").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let (config, source) = load_config_with("does/not/exist/config.yaml", env(&[])).unwrap();
        assert_eq!(source, ConfigSource::Defaults);
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.logging.general_log_retention_days, 10);
    }

    #[test]
    fn existing_file_is_reported_as_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "server:\n  port: 9000\n").unwrap();

        let (config, source) =
            load_config_with(path.to_str().unwrap(), env(&[("SERVER_PORT", "9001")])).unwrap();
        assert_eq!(source, ConfigSource::File);
        assert_eq!(config.server.port, 9001);
    }

    #[test]
    fn env_overrides_host_and_port() {
        let config = apply_env_overrides(
            Config::default(),
            env(&[("SERVER_HOST", "127.0.0.1"), ("SERVER_PORT", "3000")]),
        )
        .unwrap();
        assert_eq!(config.bind_addr().unwrap().to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        let err = apply_env_overrides(Config::default(), env(&[("SERVER_PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn ipv6_host_resolves() {
        let mut config = Config::default();
        config.server.host = "::".to_string();
        assert!(config.bind_addr().unwrap().is_ipv6());
    }

    #[test]
    fn hostname_is_not_a_bind_address() {
        let mut config = Config::default();
        config.server.host = "localhost".to_string();
        assert!(config.bind_addr().is_err());
    }
}
