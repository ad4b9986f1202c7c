use crate::domain::model::{Direction, Scale};
use crate::domain::ports::StringResources;
use crate::utils::error::{ConvError, Result};
use crate::utils::validation::{self, Validate};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;

static ENV_VAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub converter: ConverterConfig,
    pub strings: Strings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Initial switch position when the command line does not set one.
    pub fahrenheit_to_celsius: bool,
}

/// Header and label text, the counterpart of a string-resource table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Strings {
    /// Header template; `{from}` and `{to}` become the unit glyphs.
    pub head: String,
    pub celsius: String,
    pub fahrenheit: String,
}

impl Default for Strings {
    fn default() -> Self {
        Self {
            head: "Convert {from} to {to}".to_string(),
            celsius: "Degrees Celsius".to_string(),
            fahrenheit: "Degrees Fahrenheit".to_string(),
        }
    }
}

impl StringResources for Strings {
    fn head(&self, from: Scale, to: Scale) -> String {
        self.head
            .replace("{from}", from.symbol())
            .replace("{to}", to.symbol())
    }

    fn label(&self, scale: Scale) -> String {
        match scale {
            Scale::Celsius => self.celsius.clone(),
            Scale::Fahrenheit => self.fahrenheit.clone(),
        }
    }
}

impl TomlConfig {
    /// Loads and parses a config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ConvError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ConvError::TomlError {
            message: e.to_string(),
        })
    }

    /// Expands `${VAR}` references; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn direction(&self) -> Direction {
        Direction::from_flag(self.converter.fahrenheit_to_celsius)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.strings.validate()
    }
}

impl Validate for Strings {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("strings.head", &self.head)?;
        validation::validate_placeholders("strings.head", &self.head, &["{from}", "{to}"])?;
        validation::validate_non_empty_string("strings.celsius", &self.celsius)?;
        validation::validate_non_empty_string("strings.fahrenheit", &self.fahrenheit)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.direction(), Direction::CelsiusToFahrenheit);
        assert_eq!(config.strings, Strings::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[converter]
fahrenheit_to_celsius = true

[strings]
head = "From {from} into {to}"
celsius = "Celsius"
fahrenheit = "Fahrenheit"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.direction(), Direction::FahrenheitToCelsius);
        assert_eq!(
            config.strings.head(Scale::Fahrenheit, Scale::Celsius),
            "From ℉ into ℃"
        );
        assert_eq!(config.strings.label(Scale::Celsius), "Celsius");
    }

    #[test]
    fn test_partial_strings_keep_defaults() {
        let config = TomlConfig::from_toml_str("[strings]\ncelsius = \"C\"\n").unwrap();

        assert_eq!(config.strings.celsius, "C");
        assert_eq!(config.strings.fahrenheit, "Degrees Fahrenheit");
        assert_eq!(config.strings.head, "Convert {from} to {to}");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TEMPCONV_TEST_CELSIUS_LABEL", "Grad Celsius");

        let toml_content = r#"
[strings]
celsius = "${TEMPCONV_TEST_CELSIUS_LABEL}"
fahrenheit = "${TEMPCONV_TEST_UNSET_VARIABLE}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.strings.celsius, "Grad Celsius");
        assert_eq!(config.strings.fahrenheit, "${TEMPCONV_TEST_UNSET_VARIABLE}");

        std::env::remove_var("TEMPCONV_TEST_CELSIUS_LABEL");
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str("[strings]\nhead = \"Convert to {to}\"\n").unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[strings]\nfahrenheit = \"\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let err = TomlConfig::from_toml_str("[converter\n").unwrap_err();
        assert!(matches!(err, ConvError::TomlError { .. }));

        let err = TomlConfig::from_toml_str("[converter]\nfahrenheit_to_celsius = \"yes\"\n")
            .unwrap_err();
        assert!(matches!(err, ConvError::TomlError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[converter]\nfahrenheit_to_celsius = true\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.direction(), Direction::FahrenheitToCelsius);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TomlConfig::from_file("/definitely/not/here/tempconv.toml").unwrap_err();
        assert!(matches!(err, ConvError::IoError(_)));
    }
}
