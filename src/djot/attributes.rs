//! Attribute rendering: `{.class #id key="value"}`.

use crate::tree::{Attributes, is_internal, keys};

use super::escape::escape_attribute_value;

/// Render the user-visible attributes of a node.
///
/// Returns the empty string when nothing visible remains after internal
/// keys are filtered out.
///
/// # Examples
///
/// ```
/// use djot_fmt::djot::render_attributes;
/// use djot_fmt::tree::Attributes;
///
/// let attrs: Attributes = [("class", "a b"), ("id", "x"), ("$Href", "/")]
///     .into_iter()
///     .collect();
/// assert_eq!(render_attributes(&attrs), "{.a .b #x}");
/// ```
pub fn render_attributes(attrs: &Attributes) -> String {
    render_attributes_except(attrs, &[])
}

/// Render attributes, also suppressing keys a handler already consumed
/// structurally (such as `src` and `alt` on images).
pub fn render_attributes_except(attrs: &Attributes, consumed: &[&str]) -> String {
    let mut classes: Vec<&str> = Vec::new();
    let mut id = None;
    let mut pairs: Vec<(&str, &str)> = Vec::new();

    for (key, value) in attrs.iter() {
        if is_internal(key) || consumed.contains(&key) {
            continue;
        }
        match key {
            keys::CLASS => classes.extend(value.split_whitespace()),
            keys::ID if !value.is_empty() => id = Some(value),
            keys::ID => {}
            _ => pairs.push((key, value)),
        }
    }

    let mut parts: Vec<String> = classes.iter().map(|c| format!(".{c}")).collect();
    if let Some(id) = id {
        parts.push(format!("#{id}"));
    }
    parts.extend(
        pairs
            .iter()
            .map(|(k, v)| format!("{k}=\"{}\"", escape_attribute_value(v))),
    );

    if parts.is_empty() {
        String::new()
    } else {
        format!("{{{}}}", parts.join(" "))
    }
}
