use crate::{api::DEFAULT_ENDPOINT, compose};
use anyhow::{anyhow, Result};
use std::path::PathBuf;
use tokio::io::AsyncReadExt;

const CONFIG_PATH_REL_HOME: &str = ".config/bored-bot/config.toml";

/// Overrides `general.discord_token` when set.
const TOKEN_ENV_VAR: &str = "BORED_BOT_TOKEN";

const DEFAULT_LOGO_PATH: &str = "./assets/bored-bot-logo.png";

/// Bot configuration
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Config {
    pub general: General,
    #[serde(default)]
    pub activity_api: ActivityApi,
    #[serde(default)]
    pub assets: Assets,
}

#[derive(serde::Serialize, serde::Deserialize)]
pub struct General {
    #[serde(default)]
    pub discord_token: String,
}

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ActivityApi {
    pub endpoint: String,
}

impl Default for ActivityApi {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
        }
    }
}

/// Static images and fonts, relative to the working directory unless absolute.
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Assets {
    pub template: PathBuf,
    pub font: PathBuf,
    pub logo: PathBuf,
}

impl Default for Assets {
    fn default() -> Self {
        Self {
            template: compose::DEFAULT_TEMPLATE_PATH.into(),
            font: compose::DEFAULT_FONT_PATH.into(),
            logo: DEFAULT_LOGO_PATH.into(),
        }
    }
}

impl Config {
    fn config_path() -> Result<PathBuf> {
        dirs::home_dir()
            .map(|p| p.join(CONFIG_PATH_REL_HOME))
            .ok_or(anyhow!("Could not find home directory"))
    }

    pub async fn load() -> Result<Self> {
        let path = Self::config_path()?;

        let mut file = tokio::fs::File::open(&path).await.map_err(|e| {
            anyhow!(
                "Could not open configuration at `{}`: {}",
                path.to_string_lossy(),
                e
            )
        })?;

        let mut contents = String::new();
        file.read_to_string(&mut contents).await.map_err(|e| {
            anyhow!(
                "Could not read configuration at `{}`: {}",
                path.to_string_lossy(),
                e
            )
        })?;

        let mut config = Self::parse(&contents).map_err(|e| {
            anyhow!(
                "Could not parse configuration at `{}`: {}",
                path.to_string_lossy(),
                e
            )
        })?;

        if let Ok(token) = std::env::var(TOKEN_ENV_VAR) {
            config.general.discord_token = token;
        }

        if config.general.discord_token.is_empty() {
            return Err(anyhow!(
                "No Discord token: set `general.discord_token` in `{}` or {}",
                path.to_string_lossy(),
                TOKEN_ENV_VAR
            ));
        }

        Ok(config)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_in_defaults() {
        let config = Config::parse("[general]\ndiscord_token = \"abc\"\n").unwrap();

        assert_eq!(config.general.discord_token, "abc");
        assert_eq!(config.activity_api.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.assets.template, PathBuf::from("./assets/bored-base.png"));
        assert_eq!(config.assets.font, PathBuf::from("./assets/Horta_demo.ttf"));
        assert_eq!(config.assets.logo, PathBuf::from("./assets/bored-bot-logo.png"));
    }

    #[test]
    fn overrides_individual_settings() {
        let config = Config::parse(
            r#"
            [general]
            discord_token = "abc"

            [activity_api]
            endpoint = "http://localhost:8080/api/activity"

            [assets]
            logo = "/srv/bored/logo.png"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.activity_api.endpoint,
            "http://localhost:8080/api/activity"
        );
        assert_eq!(config.assets.logo, PathBuf::from("/srv/bored/logo.png"));
        assert_eq!(config.assets.font, PathBuf::from("./assets/Horta_demo.ttf"));
    }

    #[test]
    fn requires_general_section() {
        assert!(Config::parse("[assets]\nlogo = \"x.png\"\n").is_err());
    }
}
