//! Entity-reference escaping for text-context output.
//!
//! The table covers the five characters that can change meaning in any
//! HTML text or quoted-attribute position. Everything else passes through
//! unchanged; escaping is a single pass over the input.

/// The entity-reference table: characters that must never appear literally
/// in escaped output, paired with their replacements.
pub const ENTITIES: &[(char, &str)] = &[
    ('&', "&amp;"),
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('\'', "&apos;"),
    ('"', "&quot;"),
];

/// Look up the entity reference for a character, if it has one.
#[must_use]
pub fn entity_for(character: char) -> Option<&'static str> {
    ENTITIES
        .iter()
        .find(|(c, _)| *c == character)
        .map(|(_, entity)| *entity)
}

/// Escape a string for insertion in a text context.
///
/// Every character in [`ENTITIES`] is replaced by its entity reference;
/// the result contains no literal `&`, `<`, `>`, `'`, or `"`.
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for character in text.chars() {
        match entity_for(character) {
            Some(entity) => escaped.push_str(entity),
            None => escaped.push(character),
        }
    }
    escaped
}
