use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::env;

const DEFAULT_CONFIG_FILE_NAME: &str = "repofile.yaml";
const DEFAULT_STORAGE_PATH: &str = "storage";
const GITHUB_API_URL: &str = "https://api.github.com";
const GITHUB_TOKEN_VAR: &str = "GITHUB_TOKEN";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub owner: String,
    pub repository: String,
    #[serde(default = "Config::default_storage_path")]
    pub path: String,
    #[serde(default)]
    pub token: String,
    #[serde(default = "Config::default_api_url")]
    pub api_url: String,
}

impl Config {
    pub async fn load() -> Result<Config> {
        let config_string = tokio::fs::read_to_string(DEFAULT_CONFIG_FILE_NAME).await?;

        let mut config = serde_yaml::from_str::<Config>(&config_string)?;

        // the environment wins over the file, so the token never has to be
        // committed alongside the repository coordinates
        if let Ok(token) = env::var(GITHUB_TOKEN_VAR) {
            config.token = token;
        }

        if config.token.is_empty() {
            bail!(
                "github token is not set (use the {} environment variable or the token config key)",
                GITHUB_TOKEN_VAR
            );
        }

        Ok(config)
    }

    fn default_storage_path() -> String {
        DEFAULT_STORAGE_PATH.to_owned()
    }

    fn default_api_url() -> String {
        GITHUB_API_URL.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::Config;

    #[test]
    fn should_fill_defaults_for_omitted_keys() {
        let config = serde_yaml::from_str::<Config>(
            r#"
            owner: octocat
            repository: spoon-knife
            "#,
        )
        .unwrap();

        assert_eq!(config.owner, "octocat");
        assert_eq!(config.repository, "spoon-knife");
        assert_eq!(config.path, "storage");
        assert_eq!(config.token, "");
        assert_eq!(config.api_url, "https://api.github.com");
    }

    #[test]
    fn should_keep_explicit_values() {
        let config = serde_yaml::from_str::<Config>(
            r#"
            owner: octocat
            repository: spoon-knife
            path: attachments
            token: t0ken
            api_url: https://github.example.com/api/v3
            "#,
        )
        .unwrap();

        assert_eq!(config.path, "attachments");
        assert_eq!(config.token, "t0ken");
        assert_eq!(config.api_url, "https://github.example.com/api/v3");
    }
}
