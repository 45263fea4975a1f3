use std::collections::HashMap;

use crate::rankings::types::TemplateKind;

/// String patterns for one ranking template
///
/// Patterns use `{field}` placeholders. Unknown placeholders render as-is.
#[derive(Debug, Clone)]
pub struct Template {
    pub title_format: &'static str,
    pub item_format: &'static str,
    pub description_format: &'static str,
}

/// Fixed lookup of the built-in ranking templates
pub struct TemplateRegistry {
    templates: HashMap<TemplateKind, Template>,
}

impl TemplateRegistry {
    /// Create a registry with the three built-in templates
    pub fn new() -> Self {
        let mut registry = Self {
            templates: HashMap::new(),
        };

        registry.templates.insert(
            TemplateKind::Standard,
            Template {
                title_format: "{category} Rankings",
                item_format: "#{rank}. {name}",
                description_format: "Located in {location}",
            },
        );

        registry.templates.insert(
            TemplateKind::ScoreBased,
            Template {
                title_format: "Top {count} {category}",
                item_format: "#{rank}. {name} - {score}/100",
                description_format: "{location}",
            },
        );

        registry.templates.insert(
            TemplateKind::Comparison,
            Template {
                title_format: "{category} Comparison",
                item_format: "#{rank}. {name}",
                description_format: "{metric}: {value}",
            },
        );

        registry
    }

    /// Get a template by kind
    pub fn get(&self, kind: TemplateKind) -> &Template {
        // Every kind is registered in `new`
        &self.templates[&kind]
    }

    /// Get a template by name, falling back to `standard`
    pub fn get_by_name(&self, name: &str) -> (TemplateKind, &Template) {
        let kind = TemplateKind::from_name(name);
        (kind, self.get(kind))
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Substitute `{key}` placeholders in a single left-to-right pass
///
/// Substituted values are never re-scanned, so a college named `{rank}`
/// stays literal.
pub fn render(pattern: &str, fields: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(pattern.len() + 32);
    let mut rest = pattern;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        match after.find('}') {
            Some(close) => {
                let key = &after[..close];
                match fields.iter().find(|(k, _)| *k == key) {
                    Some((_, value)) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(key);
                        out.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}
