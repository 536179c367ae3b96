//! Serde helpers for query-string values

use serde::{Deserialize, Deserializer, de};

/// Deserialize a boolean flag spelled the way form and query values are
///
/// Accepts `true/false`, `1/0`, `yes/no`, `on/off`, `t/f`, `y/n` in any case.
/// A missing value is `false`.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(false);
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "t" | "y" => Ok(true),
        "false" | "0" | "no" | "off" | "f" | "n" => Ok(false),
        _ => Err(de::Error::custom(format!(
            "invalid boolean value `{raw}`, expected true/false, 1/0, yes/no or on/off"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Params {
        #[serde(default, deserialize_with = "flag")]
        download: bool,
    }

    fn parse(json: &str) -> Result<bool, serde_json::Error> {
        serde_json::from_str::<Params>(json).map(|p| p.download)
    }

    #[test]
    fn test_flag_spellings() {
        for yes in ["true", "1", "YES", "on", " y "] {
            assert!(parse(&format!(r#"{{"download":"{yes}"}}"#)).unwrap(), "{yes}");
        }
        for no in ["false", "0", "No", "off", "f"] {
            assert!(!parse(&format!(r#"{{"download":"{no}"}}"#)).unwrap(), "{no}");
        }
    }

    #[test]
    fn test_flag_missing_and_invalid() {
        assert!(!parse("{}").unwrap());
        assert!(!parse(r#"{"download":null}"#).unwrap());

        let err = parse(r#"{"download":"maybe"}"#).unwrap_err();
        assert!(err.to_string().contains("maybe"));
    }
}
