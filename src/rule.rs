use std::fmt;
use std::ops::Deref;

pub type Declaration = (String, String);

/// Outer condition applied around an already-built rule tree. Wrappers are
/// stored outermost-first and always enclose the whole tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleWrapper {
    Media(String),
}

/// One breakpoint-scoped rule nested under `@media (width >= min_width)`.
/// Nested rules carry no selector of their own; they render with the parent
/// rule's selector, so a selector transformation applied to the parent is
/// uniform across the tree by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestedRule {
    pub min_width: String,
    pub declarations: Vec<Declaration>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub selector: String,
    pub declarations: Vec<Declaration>,
    pub nested: Vec<NestedRule>,
    pub wrappers: Vec<RuleWrapper>,
}

impl Rule {
    pub fn render(&self, minify: bool) -> CssOutput {
        let mut blocks = Vec::with_capacity(self.nested.len() + 1);
        blocks.push(render_block(&self.selector, &self.declarations, minify));
        for nested in &self.nested {
            let condition = format!("(width >= {})", nested.min_width);
            let inner = render_block(&self.selector, &nested.declarations, minify);
            blocks.push(wrap_rule(&RuleWrapper::Media(condition), &inner, minify));
        }

        let mut css = if minify {
            blocks.concat()
        } else {
            blocks.join("\n")
        };
        for wrapper in self.wrappers.iter().rev() {
            css = wrap_rule(wrapper, &css, minify);
        }
        CssOutput::new(css)
    }
}

fn render_block(selector: &str, declarations: &[Declaration], minify: bool) -> String {
    if minify {
        let body = declarations
            .iter()
            .map(|(property, value)| format!("{}:{}", property, value))
            .collect::<Vec<_>>()
            .join(";");
        format!("{}{{{}}}", selector, body)
    } else {
        let body = declarations
            .iter()
            .map(|(property, value)| format!("  {}: {};", property, value))
            .collect::<Vec<_>>()
            .join("\n");
        format!("{} {{\n{}\n}}", selector, body)
    }
}

pub fn wrap_rule(wrapper: &RuleWrapper, rule: &str, minify: bool) -> String {
    match wrapper {
        RuleWrapper::Media(query) => {
            if minify {
                format!("@media {}{{{}}}", query, rule)
            } else {
                format!("@media {} {{\n{}\n}}", query, indent_css_block(rule, 2))
            }
        }
    }
}

fn indent_css_block(css: &str, spaces: usize) -> String {
    let padding = " ".repeat(spaces);
    css.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", padding, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn escape_selector(class: &str) -> String {
    let mut escaped = String::with_capacity(class.len() * 2);

    for ch in class.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            ':' => escaped.push_str("\\:"),
            '/' => escaped.push_str("\\/"),
            '[' => escaped.push_str("\\["),
            ']' => escaped.push_str("\\]"),
            '(' => escaped.push_str("\\("),
            ')' => escaped.push_str("\\)"),
            '&' => escaped.push_str("\\&"),
            '>' => escaped.push_str("\\>"),
            '+' => escaped.push_str("\\+"),
            ',' => escaped.push_str("\\,"),
            '%' => escaped.push_str("\\%"),
            '=' => escaped.push_str("\\="),
            '!' => escaped.push_str("\\!"),
            '*' => escaped.push_str("\\*"),
            '@' => escaped.push_str("\\@"),
            '#' => escaped.push_str("\\#"),
            '\'' => escaped.push_str("\\'"),
            '"' => escaped.push_str("\\\""),
            '.' => escaped.push_str("\\."),
            _ => escaped.push(ch),
        }
    }

    escaped
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssOutput(String);

impl CssOutput {
    pub fn new(css: String) -> Self {
        Self(css)
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.0.contains(needle)
    }
}

impl Deref for CssOutput {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0.as_str()
    }
}

impl fmt::Display for CssOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl From<String> for CssOutput {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<CssOutput> for String {
    fn from(value: CssOutput) -> Self {
        value.0
    }
}
