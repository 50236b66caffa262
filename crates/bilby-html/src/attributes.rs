//! Canonical attribute-string serialization.
//!
//! Converts structured values into the deterministic, sorted,
//! space-separated `key="value"` form used when a map is interpolated
//! inside a start tag. Identical logical input always serializes to
//! byte-identical output, regardless of input iteration order: the outer
//! attribute list is stable-sorted by key, and `style` declarations are
//! sorted by their rendered `key: value;` string.

use crate::value::Value;

/// Attributes that are pure toggles: present (bare, no value) when true,
/// omitted entirely when false.
pub const BOOLEAN_ATTRIBUTES: &[&str] = &[
    // Global attributes
    "contenteditable",
    "hidden",
    "spellcheck",
    // Media attributes
    "autoplay",
    "controls",
    "loop",
    "muted",
    "preload",
    // Input attributes
    "autofocus",
    "disabled",
    "multiple",
    "readonly",
    "required",
    "selected",
    "wrap",
    // Script attributes
    "async",
    "defer",
];

/// How a value renders in a particular attribute position.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeRendering {
    /// The attribute has no representation and is dropped from serialized
    /// attribute sets. Direct interpolation falls back to the generic
    /// textual conversion instead; omission is never a hard failure.
    Omitted,
    /// The attribute renders as its bare name with no `="value"` part.
    Bare,
    /// The attribute renders with the given value text.
    Text(String),
}

/// Resolve the representation of `value` for the attribute named
/// `attribute` on the element named `element`.
///
/// The built-in rules do not currently distinguish by element, but the
/// element name is part of the contract and is threaded through from
/// every call site.
///
/// - Booleans follow the boolean-attribute rules: toggle attributes in
///   [`BOOLEAN_ATTRIBUTES`] render bare or are omitted; `translate` maps
///   to `yes`/`no`; `autocomplete` maps to `on`/`off`; anything else
///   renders `true`/`false` literally.
/// - A list for `class` joins its items with single spaces; lists for any
///   other attribute have no representation.
/// - A map for `style` renders each pair as `key: value;`, sorted by the
///   rendered string; maps for any other attribute have no representation.
/// - Everything else renders through the generic textual conversion.
#[must_use]
pub fn attribute_value(attribute: &str, _element: &str, value: &Value) -> AttributeRendering {
    match value {
        Value::Bool(toggled) => boolean_attribute_value(attribute, *toggled),
        Value::List(items) if attribute == "class" => {
            let classes: Vec<String> = items.iter().map(ToString::to_string).collect();
            AttributeRendering::Text(classes.join(" "))
        }
        Value::Map(declarations) if attribute == "style" => {
            AttributeRendering::Text(style_declarations(declarations))
        }
        Value::List(_) | Value::Map(_) => AttributeRendering::Omitted,
        other => AttributeRendering::Text(other.to_string()),
    }
}

/// Serialize an ordered collection of key-value pairs into a canonical
/// attribute string scoped to the element named `element`.
///
/// `aria` and `data` keys whose value is itself a map expand one level
/// into `key-nestedKey` pairs before sorting. Pairs whose value yields no
/// representation are omitted entirely. Output pairs are stable-sorted by
/// key, ascending by code point, and joined with single spaces with no
/// trailing space. Double quotes inside values become `&quot;` so a value
/// can never close its own quoting.
#[must_use]
pub fn serialize_attributes(entries: &[(String, Value)], element: &str) -> String {
    let mut resolved: Vec<(String, Option<String>)> = Vec::new();

    for (key, value) in entries {
        match (key.as_str(), value) {
            ("aria" | "data", Value::Map(nested)) => {
                for (nested_key, nested_value) in nested {
                    resolve_into(
                        &mut resolved,
                        format!("{key}-{nested_key}"),
                        element,
                        nested_value,
                    );
                }
            }
            _ => resolve_into(&mut resolved, key.clone(), element, value),
        }
    }

    resolved.sort_by(|left, right| left.0.cmp(&right.0));

    let pairs: Vec<String> = resolved
        .iter()
        .map(|(name, value)| match value {
            Some(value) => format!(r#"{name}="{}""#, value.replace('"', "&quot;")),
            None => name.clone(),
        })
        .collect();
    pairs.join(" ")
}

/// Resolve one attribute pair and append its rendering, dropping pairs
/// with no representation.
fn resolve_into(
    resolved: &mut Vec<(String, Option<String>)>,
    name: String,
    element: &str,
    value: &Value,
) {
    match attribute_value(&name, element, value) {
        AttributeRendering::Text(text) => resolved.push((name, Some(text))),
        AttributeRendering::Bare => resolved.push((name, None)),
        AttributeRendering::Omitted => {}
    }
}

/// Boolean-attribute rules. See [`attribute_value`].
fn boolean_attribute_value(attribute: &str, toggled: bool) -> AttributeRendering {
    if BOOLEAN_ATTRIBUTES.contains(&attribute) {
        return if toggled {
            AttributeRendering::Bare
        } else {
            AttributeRendering::Omitted
        };
    }

    let text = match attribute {
        "translate" => {
            if toggled {
                "yes"
            } else {
                "no"
            }
        }
        "autocomplete" => {
            if toggled {
                "on"
            } else {
                "off"
            }
        }
        _ => {
            if toggled {
                "true"
            } else {
                "false"
            }
        }
    };
    AttributeRendering::Text(text.to_owned())
}

/// Render a `style` map: each pair as `key: value;`, sorted by the
/// rendered declaration string, joined with single spaces.
///
/// Sorting the rendered strings is not the same as sorting keys: with
/// keys `font` and `font-weight`, `-` sorts before `:`, so
/// `font-weight: …;` precedes `font: …;`.
fn style_declarations(declarations: &[(String, Value)]) -> String {
    let mut rendered: Vec<String> = declarations
        .iter()
        .map(|(property, value)| format!("{property}: {value};"))
        .collect();
    rendered.sort();
    rendered.join(" ")
}
