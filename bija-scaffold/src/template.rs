//! Template rendering.
//!
//! Templates use `<%= name %>` placeholders. Built-in templates are indented
//! with two spaces; [`reflow_indent`] rewrites that to the configured tab size.

use indexmap::IndexMap;

use crate::{Error, Result};

const OPEN: &str = "<%=";
const CLOSE: &str = "%>";

/// Indentation width of the built-in templates.
const TEMPLATE_TAB_SIZE: usize = 2;

/// Variables available to a template, in insertion order.
pub type TemplateVariables = IndexMap<&'static str, String>;

/// Substitute every `<%= name %>` placeholder in `text`.
///
/// An unterminated placeholder is copied verbatim.
pub fn render(template: &str, text: &str, variables: &TemplateVariables) -> Result<String> {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(OPEN) {
        let after_open = &rest[start + OPEN.len()..];
        let Some(end) = after_open.find(CLOSE) else {
            break;
        };

        let name = after_open[..end].trim();
        let value = variables.get(name).ok_or_else(|| {
            Box::new(Error::UnknownTemplateVariable {
                template: template.to_string(),
                variable: name.to_string(),
            })
        })?;

        out.push_str(&rest[..start]);
        out.push_str(value);
        rest = &after_open[end + CLOSE.len()..];
    }

    out.push_str(rest);
    Ok(out)
}

/// Rewrite leading indentation from two-space levels to `tab_size`-space levels.
///
/// Odd leftover spaces are dropped.
pub fn reflow_indent(text: &str, tab_size: usize) -> String {
    let tab = " ".repeat(tab_size);
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        out.push(c);
        if c != '\n' {
            continue;
        }

        let mut spaces = 0;
        while chars.next_if_eq(&' ').is_some() {
            spaces += 1;
        }
        out.push_str(&tab.repeat(spaces / TEMPLATE_TAB_SIZE));
    }

    out
}
