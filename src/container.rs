use crate::padding::{self, ContainerPadding};
use crate::rule::{Declaration, NestedRule, Rule};
use crate::screen::{self, Breakpoint};
use crate::theme::Theme;

pub const CONTAINER_SELECTOR: &str = ".container";

/// Everything the rule builder needs, resolved once per build invocation.
/// Breakpoints are already deduplicated and ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerConfig {
    pub breakpoints: Vec<Breakpoint>,
    pub center: bool,
    pub padding: ContainerPadding,
}

impl ContainerConfig {
    pub fn from_theme(theme: &Theme) -> Self {
        Self {
            breakpoints: screen::normalize(
                theme.container.screens.as_ref(),
                theme.screens.as_ref(),
            ),
            center: theme.container.center,
            padding: padding::resolve(theme.container.padding.as_ref()),
        }
    }

    /// Builds the base `.container` rule with one nested range-media rule
    /// per breakpoint. Pure: identical configs yield identical trees.
    pub fn build(&self) -> Rule {
        let mut declarations = vec![decl("width", "100%")];
        if self.center {
            declarations.push(decl("margin-left", "auto"));
            declarations.push(decl("margin-right", "auto"));
        }
        if let Some(value) = self.padding.default.as_ref() {
            declarations.push(decl("padding-left", value));
            declarations.push(decl("padding-right", value));
        }

        let nested = self
            .breakpoints
            .iter()
            .map(|breakpoint| {
                let mut declarations = vec![decl("max-width", &breakpoint.min)];
                let override_value = breakpoint
                    .name
                    .as_ref()
                    .and_then(|name| self.padding.by_screen.get(name));
                if let Some(value) = override_value {
                    declarations.push(decl("padding-left", value));
                    declarations.push(decl("padding-right", value));
                }
                NestedRule {
                    min_width: breakpoint.min.clone(),
                    declarations,
                }
            })
            .collect();

        Rule {
            selector: CONTAINER_SELECTOR.to_string(),
            declarations,
            nested,
            wrappers: Vec::new(),
        }
    }
}

fn decl(property: &str, value: &str) -> Declaration {
    (property.to_string(), value.to_string())
}
