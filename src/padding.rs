use crate::theme::PaddingConfig;
use std::collections::BTreeMap;

/// Reserved key selecting the base-rule padding, matched case-sensitively.
pub const DEFAULT_KEY: &str = "DEFAULT";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContainerPadding {
    pub default: Option<String>,
    pub by_screen: BTreeMap<String, String>,
}

/// Merges the raw padding configuration into a lookup usable during rule
/// emission. Override keys are matched against breakpoint names later, so an
/// unmatched name simply never surfaces in the output.
pub fn resolve(raw: Option<&PaddingConfig>) -> ContainerPadding {
    match raw {
        None => ContainerPadding::default(),
        Some(PaddingConfig::Length(value)) => ContainerPadding {
            default: Some(value.clone()),
            by_screen: BTreeMap::new(),
        },
        Some(PaddingConfig::Map(entries)) => {
            let mut default = None;
            let mut by_screen = BTreeMap::new();
            for (name, value) in entries {
                if name == DEFAULT_KEY {
                    default = Some(value.clone());
                } else {
                    by_screen.insert(name.clone(), value.clone());
                }
            }
            ContainerPadding { default, by_screen }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::resolve;
    use crate::theme::PaddingConfig;
    use std::collections::BTreeMap;

    #[test]
    fn absent_padding_yields_nothing() {
        let padding = resolve(None);
        assert_eq!(padding.default, None);
        assert!(padding.by_screen.is_empty());
    }

    #[test]
    fn scalar_padding_sets_the_default_only() {
        let padding = resolve(Some(&PaddingConfig::Length("2rem".to_string())));
        assert_eq!(padding.default.as_deref(), Some("2rem"));
        assert!(padding.by_screen.is_empty());
    }

    #[test]
    fn keyed_padding_splits_default_from_overrides() {
        let mut entries = BTreeMap::new();
        entries.insert("DEFAULT".to_string(), "1rem".to_string());
        entries.insert("sm".to_string(), "2rem".to_string());
        entries.insert("lg".to_string(), "4rem".to_string());
        let padding = resolve(Some(&PaddingConfig::Map(entries)));
        assert_eq!(padding.default.as_deref(), Some("1rem"));
        assert_eq!(padding.by_screen["sm"], "2rem");
        assert_eq!(padding.by_screen["lg"], "4rem");
        assert!(!padding.by_screen.contains_key("DEFAULT"));
    }

    #[test]
    fn default_key_is_case_sensitive() {
        let mut entries = BTreeMap::new();
        entries.insert("default".to_string(), "1rem".to_string());
        let padding = resolve(Some(&PaddingConfig::Map(entries)));
        assert_eq!(padding.default, None);
        assert_eq!(padding.by_screen["default"], "1rem");
    }
}
