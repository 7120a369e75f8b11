use crate::Error;
use crate::configuration::Configuration;
use serde::Deserialize;

/// Serde compatible representation of [`Configuration`].
///
/// Accepts both the snake case TOML keys and the camel case keys of `cli.json`.
#[derive(Deserialize, Debug)]
pub(crate) struct ConfigFileParser {
    token: String,
    url: String,
    #[serde(default, alias = "defaultPriority")]
    default_priority: i64,
}

impl ConfigFileParser {
    #[cfg(feature = "parse-cfg")]
    pub fn from_toml(string: &str) -> Result<Configuration, Error> {
        let parsed: ConfigFileParser = toml::from_str(string)?;
        Ok(parsed.into())
    }

    pub fn from_json(string: &str) -> Result<Configuration, Error> {
        let parsed: ConfigFileParser = serde_json::from_str(string)?;
        Ok(parsed.into())
    }
}

impl From<ConfigFileParser> for Configuration {
    fn from(value: ConfigFileParser) -> Self {
        Configuration { token: value.token, url: value.url, default_priority: value.default_priority }
    }
}

#[cfg(test)]
mod tests {
    use super::ConfigFileParser;

    #[test]
    fn json_camel_case_priority() {
        let config = ConfigFileParser::from_json(r#"{"token":"AbC.123","url":"https://push.example.com","defaultPriority":4}"#)
            .unwrap();

        assert_eq!(config.token(), "AbC.123");
        assert_eq!(config.url(), "https://push.example.com");
        assert_eq!(config.default_priority(), 4);
    }

    #[test]
    fn json_missing_priority_is_zero() {
        let config = ConfigFileParser::from_json(r#"{"token":"t","url":"http://localhost"}"#).unwrap();

        assert_eq!(config.default_priority(), 0);
    }

    #[test]
    fn json_missing_token() {
        assert!(ConfigFileParser::from_json(r#"{"url":"http://localhost"}"#).is_err());
    }

    #[cfg(feature = "parse-cfg")]
    #[test]
    fn toml_snake_case_priority() {
        let config = ConfigFileParser::from_toml(
            r#"
    token = "AbC.123"
    url = "https://push.example.com"
    default_priority = 7
"#,
        )
        .unwrap();

        assert_eq!(config.default_priority(), 7);
    }
}
