use crate::screen::ScreenSpec;
use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub theme: Theme,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Theme {
    #[serde(default)]
    pub screens: Option<ScreensConfig>,
    #[serde(default)]
    pub container: ContainerOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct ContainerOptions {
    #[serde(default)]
    pub screens: Option<ScreensConfig>,
    #[serde(default)]
    pub center: bool,
    #[serde(default)]
    pub padding: Option<PaddingConfig>,
}

/// Breakpoints as written in the configuration: either an ordered list of
/// bare lengths or a named map. Map entries keep declaration order because
/// the dedup tie-break depends on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreensConfig {
    List(Vec<String>),
    Map(Vec<(String, ScreenValue)>),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ScreenValue {
    Length(String),
    Range {
        #[serde(default, alias = "min-width")]
        min: Option<String>,
        #[serde(default, alias = "max-width")]
        max: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PaddingConfig {
    Length(String),
    Map(BTreeMap<String, String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub message: String,
}

pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let text = fs::read_to_string(path).map_err(|err| ConfigError {
        message: format!("failed to read config {}: {}", path.display(), err),
    })?;
    toml::from_str(&text).map_err(|err| ConfigError {
        message: format!("failed to parse config {}: {}", path.display(), err),
    })
}

impl ScreensConfig {
    /// Classifies every entry into the tagged union consumed by the
    /// normalizer. An entry without a declared minimum is skipped.
    pub fn to_specs(&self) -> Vec<ScreenSpec> {
        match self {
            Self::List(lengths) => lengths
                .iter()
                .map(|length| ScreenSpec::Scalar(length.clone()))
                .collect(),
            Self::Map(entries) => entries
                .iter()
                .filter_map(|(name, value)| match value {
                    ScreenValue::Length(min) => Some(ScreenSpec::Named {
                        name: name.clone(),
                        min: min.clone(),
                    }),
                    ScreenValue::Range {
                        min: Some(min),
                        max,
                    } => Some(ScreenSpec::Range {
                        name: name.clone(),
                        min: min.clone(),
                        max: max.clone(),
                    }),
                    ScreenValue::Range { min: None, .. } => None,
                })
                .collect(),
        }
    }
}

impl<'de> Deserialize<'de> for ScreensConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ScreensVisitor;

        impl<'de> Visitor<'de> for ScreensVisitor {
            type Value = ScreensConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a list of lengths or a map of screen definitions")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut lengths = Vec::new();
                while let Some(length) = seq.next_element::<String>()? {
                    lengths.push(length);
                }
                Ok(ScreensConfig::List(lengths))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::new();
                while let Some((name, value)) = map.next_entry::<String, ScreenValue>()? {
                    entries.push((name, value));
                }
                Ok(ScreensConfig::Map(entries))
            }
        }

        deserializer.deserialize_any(ScreensVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::{load, Config, ScreensConfig, ScreenValue};
    use crate::screen::ScreenSpec;
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn loads_toml_config() {
        let path = temp_path("railframe_config");
        let _ = fs::write(
            &path,
            r#"
[theme.container]
screens = ["400px", "500px"]
center = true
padding = "2rem"
"#,
        );
        let config = load(&path).expect("config should parse");
        assert!(config.theme.container.center);
        assert_eq!(
            config.theme.container.screens,
            Some(ScreensConfig::List(vec![
                "400px".to_string(),
                "500px".to_string()
            ]))
        );
    }

    #[test]
    fn defaults_when_config_is_empty() {
        let path = temp_path("railframe_config_default");
        let _ = fs::write(&path, "");
        let config = load(&path).expect("config should parse");
        assert_eq!(config, Config::default());
        assert!(config.theme.screens.is_none());
        assert!(!config.theme.container.center);
    }

    #[test]
    fn named_screens_keep_declaration_order() {
        let config: Config = toml::from_str(
            r#"
[theme.screens]
md = "768px"
sm = "576px"
"#,
        )
        .expect("config should parse");
        let Some(ScreensConfig::Map(entries)) = config.theme.screens else {
            panic!("expected a named screen map");
        };
        assert_eq!(entries[0].0, "md");
        assert_eq!(entries[1].0, "sm");
    }

    #[test]
    fn range_screens_accept_both_key_spellings() {
        let config: Config = toml::from_str(
            r#"
[theme.screens]
sm = "576px"
md = { min = "768px" }
lg = { "min-width" = "992px" }
xl = { min = "1200px", max = "1600px" }
"#,
        )
        .expect("config should parse");
        let Some(screens) = config.theme.screens else {
            panic!("expected screens");
        };
        let specs = screens.to_specs();
        assert_eq!(specs.len(), 4);
        assert_eq!(
            specs[2],
            ScreenSpec::Range {
                name: "lg".to_string(),
                min: "992px".to_string(),
                max: None,
            }
        );
        assert_eq!(
            specs[3],
            ScreenSpec::Range {
                name: "xl".to_string(),
                min: "1200px".to_string(),
                max: Some("1600px".to_string()),
            }
        );
    }

    #[test]
    fn range_screen_without_a_minimum_is_skipped() {
        let screens = ScreensConfig::Map(vec![
            (
                "broken".to_string(),
                ScreenValue::Range {
                    min: None,
                    max: Some("767px".to_string()),
                },
            ),
            ("sm".to_string(), ScreenValue::Length("576px".to_string())),
        ]);
        let specs = screens.to_specs();
        assert_eq!(specs.len(), 1);
        assert_eq!(
            specs[0],
            ScreenSpec::Named {
                name: "sm".to_string(),
                min: "576px".to_string(),
            }
        );
    }

    #[test]
    fn keyed_padding_parses_as_a_map() {
        let config: Config = toml::from_str(
            r#"
[theme.container.padding]
DEFAULT = "1rem"
sm = "2rem"
"#,
        )
        .expect("config should parse");
        let Some(super::PaddingConfig::Map(entries)) = config.theme.container.padding else {
            panic!("expected keyed padding");
        };
        assert_eq!(entries["DEFAULT"], "1rem");
        assert_eq!(entries["sm"], "2rem");
    }

    fn temp_path(prefix: &str) -> std::path::PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        std::env::temp_dir().join(format!("{}_{}.toml", prefix, nanos))
    }
}
