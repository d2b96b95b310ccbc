//! Generator configuration
//!
//! Defaults reproduce the stock tool: banner path cut at `chrome`, current
//! calendar year, unchanged outputs left untouched. Each knob can be
//! overridden through a `JSTUB_*` environment variable.

use chrono::Datelike;

use crate::consts::{
    DEFAULT_ANCHOR_DIR, ENV_ANCHOR_DIR, ENV_ONLY_IF_CHANGED, ENV_SCRIPT_NAME, ENV_YEAR,
};
use crate::error::{Error, Result};
use crate::stub::current_script_name;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path segment the banner's script path starts at
    pub anchor_dir: String,
    /// Fixed banner path; computed from the running executable when unset
    pub script_name: Option<String>,
    /// Fixed copyright year; current local year when unset
    pub year: Option<i32>,
    /// Leave an existing output alone when its bytes would not change
    pub only_if_changed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            anchor_dir: DEFAULT_ANCHOR_DIR.to_string(),
            script_name: None,
            year: None,
            only_if_changed: true,
        }
    }
}

impl Config {
    /// Defaults overlaid with the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overlaid with whatever `lookup` returns for each variable
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(anchor) = lookup(ENV_ANCHOR_DIR) {
            if anchor.is_empty() {
                return Err(Error::config_error(format!("{} must not be empty", ENV_ANCHOR_DIR)));
            }
            config.anchor_dir = anchor;
        }

        config.script_name = lookup(ENV_SCRIPT_NAME).filter(|s| !s.is_empty());

        if let Some(year) = lookup(ENV_YEAR) {
            let parsed = year.trim().parse::<i32>().map_err(|_| {
                Error::config_error(format!("{}='{}' is not a year", ENV_YEAR, year))
            })?;
            config.year = Some(parsed);
        }

        if let Some(flag) = lookup(ENV_ONLY_IF_CHANGED) {
            config.only_if_changed = !matches!(flag.trim().to_ascii_lowercase().as_str(), "0" | "false");
        }

        log::debug!("config: {:?}", config);
        Ok(config)
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_script_name(mut self, script_name: impl Into<String>) -> Self {
        self.script_name = Some(script_name.into());
        self
    }

    /// Copyright year for the banner
    pub fn resolve_year(&self) -> i32 {
        self.year.unwrap_or_else(|| chrono::Local::now().year())
    }

    /// Script path for the banner
    pub fn resolve_script_name(&self) -> Result<String> {
        match &self.script_name {
            Some(name) => Ok(name.clone()),
            None => current_script_name(&self.anchor_dir),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).expect("config");
        assert_eq!(config, Config::default());
        assert_eq!(config.anchor_dir, "chrome");
        assert!(config.only_if_changed);
    }

    #[test]
    fn variables_override_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("JSTUB_ANCHOR_DIR", "src"),
            ("JSTUB_SCRIPT_NAME", "tools/jstub"),
            ("JSTUB_YEAR", "2019"),
            ("JSTUB_ONLY_IF_CHANGED", "false"),
        ]))
        .expect("config");

        assert_eq!(config.anchor_dir, "src");
        assert_eq!(config.resolve_script_name().expect("script"), "tools/jstub");
        assert_eq!(config.resolve_year(), 2019);
        assert!(!config.only_if_changed);
    }

    #[test]
    fn bad_year_is_a_config_error() {
        match Config::from_lookup(lookup_from(&[("JSTUB_YEAR", "next year")])) {
            Err(Error::Config { message }) => assert!(message.contains("JSTUB_YEAR")),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn empty_anchor_is_rejected() {
        assert!(Config::from_lookup(lookup_from(&[("JSTUB_ANCHOR_DIR", "")])).is_err());
    }

    #[test]
    fn only_if_changed_accepts_zero_to_disable() {
        let off = Config::from_lookup(lookup_from(&[("JSTUB_ONLY_IF_CHANGED", "0")])).expect("config");
        assert!(!off.only_if_changed);
        let on = Config::from_lookup(lookup_from(&[("JSTUB_ONLY_IF_CHANGED", "1")])).expect("config");
        assert!(on.only_if_changed);
    }

    #[test]
    fn unset_year_uses_the_clock() {
        let year = Config::default().resolve_year();
        assert!(year >= 2024);
    }
}
