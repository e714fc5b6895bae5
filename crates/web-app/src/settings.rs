use std::str::FromStr;

use chrono::TimeDelta;
use fitcoach_domain::Unit;
use url::Url;

pub const DEFAULT_API_BASE: &str = "http://localhost:5000";
pub const ENV_API_BASE: &str = "FITCOACH_API_BASE";
pub const ENV_UNIT: &str = "FITCOACH_UNIT";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub api_base: Url,
    pub default_unit: Unit,
    /// How long a success message stays visible before the form returns to idle.
    pub success_display: TimeDelta,
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let mut settings = Self::default();

        if let Some(api_base) = lookup(ENV_API_BASE).filter(|v| !v.trim().is_empty()) {
            settings.api_base = Url::parse(api_base.trim())
                .map_err(|err| SettingsError::InvalidApiBase(api_base.clone(), err))?;
        }

        if let Some(unit) = lookup(ENV_UNIT).filter(|v| !v.trim().is_empty()) {
            settings.default_unit =
                Unit::from_str(unit.trim()).map_err(|_| SettingsError::InvalidUnit(unit))?;
        }

        Ok(settings)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base: Url::parse(DEFAULT_API_BASE).expect("default API base is a valid URL"),
            default_unit: Unit::Kg,
            success_display: TimeDelta::seconds(2),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SettingsError {
    #[error("invalid API base URL {0:?}: {1}")]
    InvalidApiBase(String, url::ParseError),
    #[error("invalid unit {0:?}, expected kg or lbs")]
    InvalidUnit(String),
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect::<HashMap<_, _>>();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_settings_default() {
        let settings = Settings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.api_base.as_str(), "http://localhost:5000/");
        assert_eq!(settings.success_display, TimeDelta::seconds(2));
    }

    #[test]
    fn test_settings_from_lookup() {
        let settings = Settings::from_lookup(lookup(&[
            (ENV_API_BASE, "https://coach.example.org/api"),
            (ENV_UNIT, "LBS"),
        ]))
        .unwrap();
        assert_eq!(settings.api_base.as_str(), "https://coach.example.org/api");
        assert_eq!(settings.default_unit, Unit::Lbs);
    }

    #[test]
    fn test_settings_invalid() {
        assert!(matches!(
            Settings::from_lookup(lookup(&[(ENV_API_BASE, "not a url")])),
            Err(SettingsError::InvalidApiBase(..))
        ));
        assert_eq!(
            Settings::from_lookup(lookup(&[(ENV_UNIT, "stone")])),
            Err(SettingsError::InvalidUnit("stone".to_string()))
        );
    }
}
