use std::env;
use strum::EnumString;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

/// Picks the runtime environment from `ENV`, falling back to the build profile.
pub fn which() -> Environment {
    resolve(env::var("ENV").ok().as_deref())
}

fn resolve(value: Option<&str>) -> Environment {
    #[cfg(debug_assertions)]
    let default_env = Environment::Development;
    #[cfg(not(debug_assertions))]
    let default_env = Environment::Production;

    match value {
        None => default_env,
        Some(v) => v.trim().parse().unwrap_or(default_env),
    }
}

impl Environment {
    pub fn default_log_level(&self) -> &'static str {
        match self {
            Environment::Development => "debug",
            Environment::Production => "info",
        }
    }
}
