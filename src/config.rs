use serde::Deserialize;
use std::fs;

#[derive(Deserialize, Debug)]
pub struct Config {
    pub commands: Commands,
    pub server: ServerConfig,
    pub keybinds: Keybinds,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Commands {
    pub install: String,
    pub serve: String,
    pub install_marker: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ServerConfig {
    pub url: String,
    pub ready_marker: String,
    pub open_delay_ms: u64,
}

#[derive(Deserialize, Debug)]
pub struct Keybinds {
    pub app: AppKeys,
    pub server: ServerKeys,
    pub logs: LogsKeys,
}

#[derive(Deserialize, Debug)]
pub struct AppKeys {
    pub quit: String,
    pub open_site: String,
}

#[derive(Deserialize, Debug)]
pub struct ServerKeys {
    pub start: String,
    pub stop: String,
}

#[derive(Deserialize, Debug)]
pub struct LogsKeys {
    pub scroll_down: String,
    pub scroll_up: String,
    pub toggle_auto_scroll: String,
}

impl Config {
    pub fn load() -> Result<Self, toml::de::Error> {
        let content = fs::read_to_string("launcher.toml")
            .unwrap_or_else(|_| include_str!("../launcher.toml").to_string());
        toml::from_str(&content)
    }
}
