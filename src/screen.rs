use crate::theme::ScreensConfig;
use std::collections::BTreeSet;

/// Raw breakpoint entry as declared in configuration, classified once at the
/// boundary. All later stages operate on [`Breakpoint`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenSpec {
    Scalar(String),
    Named {
        name: String,
        min: String,
    },
    Range {
        name: String,
        min: String,
        max: Option<String>,
    },
}

/// Canonical breakpoint. `min` is always present and is the sort and dedup
/// key; `max` is carried for completeness but never drives emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakpoint {
    pub name: Option<String>,
    pub min: String,
    pub max: Option<String>,
}

pub fn default_screens() -> Vec<ScreenSpec> {
    [
        ("sm", "640px"),
        ("md", "768px"),
        ("lg", "1024px"),
        ("xl", "1280px"),
        ("2xl", "1536px"),
    ]
    .into_iter()
    .map(|(name, min)| ScreenSpec::Named {
        name: name.to_string(),
        min: min.to_string(),
    })
    .collect()
}

/// Resolves the fallback chain (explicit screens, then theme-wide screens,
/// then the builtin defaults) and normalizes the winner.
pub fn normalize(
    raw: Option<&ScreensConfig>,
    theme_fallback: Option<&ScreensConfig>,
) -> Vec<Breakpoint> {
    let specs = match raw.or(theme_fallback) {
        Some(config) => config.to_specs(),
        None => default_screens(),
    };
    normalize_specs(&specs)
}

/// Stable-sorts ascending by the numeric magnitude of the minimum width and
/// drops entries whose minimum was already kept. Stability means that among
/// equal minimums the entry declared first survives.
pub fn normalize_specs(specs: &[ScreenSpec]) -> Vec<Breakpoint> {
    let mut breakpoints = specs.iter().map(spec_to_breakpoint).collect::<Vec<_>>();
    sort_breakpoints_by_min(&mut breakpoints);
    dedup_by_min(breakpoints)
}

fn spec_to_breakpoint(spec: &ScreenSpec) -> Breakpoint {
    match spec {
        ScreenSpec::Scalar(min) => Breakpoint {
            name: None,
            min: min.clone(),
            max: None,
        },
        ScreenSpec::Named { name, min } => Breakpoint {
            name: Some(name.clone()),
            min: min.clone(),
            max: None,
        },
        ScreenSpec::Range { name, min, max } => Breakpoint {
            name: Some(name.clone()),
            min: min.clone(),
            max: max.clone(),
        },
    }
}

fn sort_breakpoints_by_min(breakpoints: &mut [Breakpoint]) {
    breakpoints.sort_by(|a, b| {
        if let (Some((a_num, _)), Some((b_num, _))) =
            (parse_length_value(&a.min), parse_length_value(&b.min))
        {
            return a_num
                .partial_cmp(&b_num)
                .unwrap_or(std::cmp::Ordering::Equal);
        }
        a.min.cmp(&b.min)
    });
}

fn dedup_by_min(breakpoints: Vec<Breakpoint>) -> Vec<Breakpoint> {
    let mut kept = Vec::with_capacity(breakpoints.len());
    let mut seen = BTreeSet::<String>::new();
    for breakpoint in breakpoints {
        if seen.insert(breakpoint.min.clone()) {
            kept.push(breakpoint);
        }
    }
    kept
}

pub fn parse_length_value(raw: &str) -> Option<(f64, String)> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }
    let split_idx = value
        .char_indices()
        .find(|(_, ch)| !ch.is_ascii_digit() && *ch != '.')
        .map(|(idx, _)| idx)?;
    let number = value[..split_idx].parse::<f64>().ok()?;
    let unit = value[split_idx..].trim().to_string();
    if unit.is_empty() {
        return None;
    }
    Some((number, unit))
}
