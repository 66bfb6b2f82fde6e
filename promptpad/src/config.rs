use ophelp_types::Error;
use serde::Deserialize;
use std::{fs, path::PathBuf};

#[derive(Deserialize)]
#[serde(default)]
pub(crate) struct Config {
    /// seeds the initial selection, goes through the normal parse.
    pub kind: String,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            kind: "map".to_owned(),
            log_file: PathBuf::from("./promptpad.log"),
        }
    }
}

impl Config {
    pub(crate) fn from_file() -> anyhow::Result<Self> {
        let path = match dirs::config_dir() {
            Some(dir) => dir.join("promptpad").join("config.toml"),
            None => return Ok(Self::default()),
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        let config = toml::from_str(&raw).map_err(|e| Error::ConfigInvalid(e.to_string()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn defaults_are_sane() {
        let config = Config::default();
        assert_eq!("map", config.kind);
        assert!(config.log_file.ends_with("promptpad.log"));
    }

    #[test]
    fn partial_file_falls_back_per_field() {
        let config: Config = toml::from_str("kind = \"reduce\"").unwrap();
        assert_eq!("reduce", config.kind);
        assert!(config.log_file.ends_with("promptpad.log"));
    }
}
