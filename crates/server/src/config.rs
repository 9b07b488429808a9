use std::{
    fmt, fs,
    net::SocketAddr,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::Deserialize;

pub const SETTINGS_FILE: &str = "site.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Some(Environment::Development),
            "production" | "prod" => Some(Environment::Production),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }

    pub fn is_production(self) -> bool {
        self == Environment::Production
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub bind_host: String,
    pub port: u16,
    pub environment: Environment,
    pub public_dir: PathBuf,
    pub body_limit_bytes: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_host: "0.0.0.0".into(),
            port: 3000,
            environment: Environment::Development,
            public_dir: PathBuf::from("public"),
            body_limit_bytes: 10 * 1024 * 1024,
        }
    }
}

impl Settings {
    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        let raw = format!("{}:{}", self.bind_host, self.port);
        raw.parse()
            .with_context(|| format!("invalid bind address '{raw}'"))
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    bind_host: Option<String>,
    port: Option<u16>,
    environment: Option<String>,
    public_dir: Option<PathBuf>,
    body_limit_bytes: Option<usize>,
}

/// Settings plus any problems found while reading them. Warnings are
/// returned rather than logged because the log format depends on the result.
pub struct LoadedSettings {
    pub settings: Settings,
    pub warnings: Vec<String>,
}

pub fn load_settings() -> LoadedSettings {
    load_settings_from(Path::new(SETTINGS_FILE), |key| std::env::var(key).ok())
}

pub fn load_settings_from<F>(file: &Path, env: F) -> LoadedSettings
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = Settings::default();
    let mut warnings = Vec::new();

    if let Ok(raw) = fs::read_to_string(file) {
        match toml::from_str::<FileSettings>(&raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.bind_host {
                    settings.bind_host = v;
                }
                if let Some(v) = file_cfg.port {
                    settings.port = v;
                }
                if let Some(v) = file_cfg.environment {
                    apply_environment(&mut settings, &mut warnings, "environment", &v);
                }
                if let Some(v) = file_cfg.public_dir {
                    settings.public_dir = v;
                }
                if let Some(v) = file_cfg.body_limit_bytes {
                    settings.body_limit_bytes = v;
                }
            }
            Err(error) => warnings.push(format!(
                "ignoring unreadable settings file '{}': {error}",
                file.display()
            )),
        }
    }

    for key in ["PORT", "APP__PORT"] {
        if let Some(v) = env(key) {
            match v.trim().parse::<u16>() {
                Ok(port) => settings.port = port,
                Err(_) => warnings.push(format!("ignoring {key}='{v}': not a valid port")),
            }
        }
    }

    for key in ["NODE_ENV", "APP__ENVIRONMENT"] {
        if let Some(v) = env(key) {
            apply_environment(&mut settings, &mut warnings, key, &v);
        }
    }

    if let Some(v) = env("APP__BIND_HOST") {
        settings.bind_host = v;
    }
    if let Some(v) = env("APP__PUBLIC_DIR") {
        settings.public_dir = PathBuf::from(v);
    }

    LoadedSettings { settings, warnings }
}

fn apply_environment(settings: &mut Settings, warnings: &mut Vec<String>, key: &str, raw: &str) {
    match Environment::parse(raw) {
        Some(environment) => settings.environment = environment,
        None => warnings.push(format!(
            "unknown {key}='{raw}', keeping {}",
            settings.environment
        )),
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
