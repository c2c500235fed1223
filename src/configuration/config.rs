#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::env;

use anyhow::Result;
use clap::ArgMatches;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

use crate::domain::models::AssistantName;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

#[derive(Clone, Copy, Eq, PartialEq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    Assistant,
    MaxCredits,
    ResponseDelay,
    StartingCredits,
    Username,
}

pub struct Config {}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return Config::default(key);
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    pub fn default(key: ConfigKey) -> String {
        if key == ConfigKey::Username {
            let mut user = env::var("USER").unwrap_or_else(|_| return "".to_string());
            if user.is_empty() {
                user = "User".to_string();
            }

            return user;
        }

        let default_assistant = AssistantName::Canned.to_string();

        let res = match key {
            ConfigKey::Assistant => &default_assistant,
            ConfigKey::MaxCredits => "50",
            ConfigKey::ResponseDelay => "1000",
            ConfigKey::StartingCredits => "25",

            // Special
            ConfigKey::Username => "",
        };

        return res.to_string();
    }

    /// Seeds every key with its default, then applies CLI overrides. All
    /// state is in-memory; nothing is read from or written to disk.
    pub fn load(clap_arg_matches: Vec<&ArgMatches>) -> Result<()> {
        for key in ConfigKey::iter() {
            Config::set(key, &Config::default(key))
        }

        for key in ConfigKey::iter() {
            for matches in clap_arg_matches.as_slice() {
                if let Ok(Some(val)) = matches.try_get_one::<String>(&key.to_string()) {
                    if val.is_empty() {
                        continue;
                    }
                    Config::set(key, val)
                }
            }
        }

        tracing::debug!(
            username = Config::get(ConfigKey::Username),
            assistant = Config::get(ConfigKey::Assistant),
            response_delay = Config::get(ConfigKey::ResponseDelay),
            starting_credits = Config::get(ConfigKey::StartingCredits),
            max_credits = Config::get(ConfigKey::MaxCredits),
            "config"
        );

        return Ok(());
    }
}
