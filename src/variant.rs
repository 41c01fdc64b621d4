use crate::rule::{escape_selector, Rule, RuleWrapper};
use crate::screen::Breakpoint;

/// Splits a class like `lg:hover:container` into its variant chain and base
/// utility. Colons inside brackets or parens never split.
pub fn parse_variants(class: &str) -> (Vec<&str>, &str) {
    let mut paren_depth = 0usize;
    let mut bracket_depth = 0usize;
    let mut split_indices = Vec::new();

    for (idx, ch) in class.char_indices() {
        match ch {
            '(' => paren_depth += 1,
            ')' => paren_depth = paren_depth.saturating_sub(1),
            '[' => bracket_depth += 1,
            ']' => bracket_depth = bracket_depth.saturating_sub(1),
            ':' if paren_depth == 0 && bracket_depth == 0 => split_indices.push(idx),
            _ => {}
        }
    }

    if split_indices.is_empty() {
        return (Vec::new(), class);
    }
    let mut variants = Vec::new();
    let mut start = 0usize;
    for idx in split_indices {
        variants.push(&class[start..idx]);
        start = idx + 1;
    }
    (variants, &class[start..])
}

/// Wraps an already-built rule tree for a variant-qualified class. Returns a
/// new tree: the transformed selector applies uniformly to the base rule and
/// every nested rule, media wrappers introduced by responsive variants
/// enclose the whole tree, and the nested ordering is untouched. The input
/// rule is never mutated.
pub fn wrap_class(rule: &Rule, class: &str, screens: &[Breakpoint]) -> Option<Rule> {
    let (variants, base) = parse_variants(class);
    if format!(".{}", base) != rule.selector {
        return None;
    }

    let mut selector = format!(".{}", escape_selector(class));
    let mut wrappers = Vec::new();
    for variant in &variants {
        selector = apply_selector_variant(selector, variant, &mut wrappers, screens)?;
    }

    // New wrappers go outermost; wrappers already on the tree stay closer in.
    wrappers.extend(rule.wrappers.iter().cloned());

    Some(Rule {
        selector,
        declarations: rule.declarations.clone(),
        nested: rule.nested.clone(),
        wrappers,
    })
}

fn apply_selector_variant(
    selector: String,
    variant: &str,
    wrappers: &mut Vec<RuleWrapper>,
    screens: &[Breakpoint],
) -> Option<String> {
    match variant {
        "dark" => {
            wrappers.push(RuleWrapper::Media(
                "(prefers-color-scheme: dark)".to_string(),
            ));
            return Some(selector);
        }
        "print" => {
            wrappers.push(RuleWrapper::Media("print".to_string()));
            return Some(selector);
        }
        _ => {}
    }

    if let Some(width) = screen_width(variant, screens) {
        wrappers.push(RuleWrapper::Media(format!("(width >= {})", width)));
        return Some(selector);
    }

    if let Some(key) = variant.strip_prefix("max-") {
        if let Some(width) = screen_width(key, screens) {
            wrappers.push(RuleWrapper::Media(format!("(width < {})", width)));
            return Some(selector);
        }
    }

    selector_for_simple_variant(variant).map(|suffix| format!("{}{}", selector, suffix))
}

fn screen_width<'a>(key: &str, screens: &'a [Breakpoint]) -> Option<&'a str> {
    screens
        .iter()
        .find(|breakpoint| breakpoint.name.as_deref() == Some(key))
        .map(|breakpoint| breakpoint.min.as_str())
}

fn selector_for_simple_variant(variant: &str) -> Option<&'static str> {
    let suffix = match variant {
        "hover" => ":hover",
        "focus" => ":focus",
        "focus-within" => ":focus-within",
        "focus-visible" => ":focus-visible",
        "active" => ":active",
        "visited" => ":visited",
        "disabled" => ":disabled",
        "checked" => ":checked",
        "first" => ":first-child",
        "last" => ":last-child",
        "odd" => ":nth-child(odd)",
        "even" => ":nth-child(even)",
        _ => return None,
    };
    Some(suffix)
}
