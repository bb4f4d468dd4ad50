use std::fs;
use std::path::PathBuf;

use crossterm::style::Color;
use directories::ProjectDirs;
use serde::Deserialize;

use crate::codes::Category;
use crate::error::{Error, Result};

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub labels: LabelConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

#[derive(Deserialize, Debug, Clone)]
pub struct GeneralConfig {
    #[serde(default = "default_true")]
    pub preview: bool,
}

fn default_true() -> bool { true }

impl Default for GeneralConfig {
    fn default() -> Self {
        Self { preview: true }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct LabelConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_title() -> String { "HTTP Status Codes (Esc to exit, Enter to select)".to_string() }
fn default_prompt() -> String { "Search: ".to_string() }

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            prompt: default_prompt(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct ThemeConfig {
    #[serde(default = "default_header")]
    pub header: String,
    #[serde(default = "default_prompt_color")]
    pub prompt: String,
    #[serde(default = "default_key")]
    pub key: String,
    #[serde(default = "default_muted")]
    pub rule: String,
    #[serde(default = "default_heading")]
    pub heading: String,
    #[serde(default = "default_muted")]
    pub muted: String,
    #[serde(default = "default_link")]
    pub link: String,
    #[serde(default = "default_informational")]
    pub informational: String,
    #[serde(default = "default_success")]
    pub success: String,
    #[serde(default = "default_redirection")]
    pub redirection: String,
    #[serde(default = "default_client_error")]
    pub client_error: String,
    #[serde(default = "default_server_error")]
    pub server_error: String,
}

fn default_header() -> String { "#ecf0f1".to_string() }
fn default_prompt_color() -> String { "#f39c12".to_string() }
fn default_key() -> String { "#3498db".to_string() }
fn default_heading() -> String { "#2ecc71".to_string() }
fn default_muted() -> String { "#7f8c8d".to_string() }
fn default_link() -> String { "#3498db".to_string() }
fn default_informational() -> String { "#3498db".to_string() }
fn default_success() -> String { "#2ecc71".to_string() }
fn default_redirection() -> String { "#f39c12".to_string() }
fn default_client_error() -> String { "#e74c3c".to_string() }
fn default_server_error() -> String { "#9b59b6".to_string() }

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            header: default_header(),
            prompt: default_prompt_color(),
            key: default_key(),
            rule: default_muted(),
            heading: default_heading(),
            muted: default_muted(),
            link: default_link(),
            informational: default_informational(),
            success: default_success(),
            redirection: default_redirection(),
            client_error: default_client_error(),
            server_error: default_server_error(),
        }
    }
}

impl ThemeConfig {
    /// Parses `#rrggbb`; anything else yields the terminal's default color.
    pub fn parse_color(hex: &str) -> Color {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Color::Reset;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        match (channel(0..2), channel(2..4), channel(4..6)) {
            (Some(r), Some(g), Some(b)) => Color::Rgb { r, g, b },
            _ => Color::Reset,
        }
    }

    pub fn category_color(&self, category: Option<Category>) -> Color {
        let hex = match category {
            Some(Category::Informational) => &self.informational,
            Some(Category::Success) => &self.success,
            Some(Category::Redirection) => &self.redirection,
            Some(Category::ClientError) => &self.client_error,
            Some(Category::ServerError) => &self.server_error,
            None => &self.muted,
        };
        Self::parse_color(hex)
    }
}

pub fn config_path() -> PathBuf {
    match ProjectDirs::from("org", "httpcode", "httpcode") {
        Some(dirs) => dirs.config_dir().join("config.toml"),
        None => PathBuf::from("config.toml"),
    }
}

pub fn load_config() -> Result<Config> {
    let config_path = config_path();
    log::debug!("config path: {}", config_path.display());

    if !config_path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&config_path)?;
    toml::from_str(&content).map_err(|source| Error::Config {
        path: config_path,
        source,
    })
}
