//! Document construction with context-dependent value rendering.
//!
//! The builder receives an alternating stream of literal fragments and
//! typed values. Literals append verbatim and advance the context parser;
//! each value renders under the disposition in effect after the preceding
//! literal, and the rendered text feeds back through the parser so later
//! fragments see correct state.

use crate::attributes::{AttributeRendering, attribute_value, serialize_attributes};
use crate::escape::escape_text;
use crate::html::HTML;
use crate::parser::{ContextParser, Disposition, QuotationMark};
use crate::value::Value;

/// Builds one HTML document from interleaved literals and values.
///
/// One builder exclusively owns one context parser for the duration of a
/// build; construction is a pure sequential fold with no I/O and no
/// failure path. Rendering the same `(disposition, value)` pair twice
/// yields byte-identical output.
///
/// ```
/// use bilby_html::HTMLBuilder;
///
/// let mut builder = HTMLBuilder::new();
/// builder.literal("<h1>Hello, ");
/// builder.value("<world>");
/// builder.literal("!</h1>");
/// assert_eq!(builder.finish().as_str(), "<h1>Hello, &lt;world&gt;!</h1>");
/// ```
#[derive(Debug, Clone)]
pub struct HTMLBuilder {
    content: String,
    parser: ContextParser,
    disposition: Disposition,
}

impl HTMLBuilder {
    /// Create an empty builder in text disposition.
    #[must_use]
    pub fn new() -> Self {
        Self {
            content: String::new(),
            parser: ContextParser::new(),
            disposition: Disposition::Text,
        }
    }

    /// Append a literal fragment verbatim and advance the context parser.
    pub fn literal(&mut self, fragment: &str) {
        self.disposition = self.parser.feed(fragment);
        self.content.push_str(fragment);
    }

    /// Render a value under the current disposition and append it.
    ///
    /// - **Text**: trusted markup inserts verbatim; a list renders each
    ///   item under the text rules joined by newlines; everything else is
    ///   entity-escaped.
    /// - **Element**: a map serializes as a canonical attribute string
    ///   scoped to the element; a list of maps serializes each, joined by
    ///   single spaces; everything else is entity-escaped.
    /// - **Attribute**: the value's per-attribute representation if it has
    ///   one, else the generic textual conversion; then `"` is
    ///   backslash-escaped unless the value opened with a single quote,
    ///   and an unquoted position is wrapped in double quotes.
    /// - **Comment**: routed through [`comment`](Self::comment).
    pub fn value(&mut self, value: impl Into<Value>) {
        let value = value.into();
        match self.disposition.clone() {
            Disposition::Text => {
                let rendered = render_text(&value);
                self.literal(&rendered);
            }
            Disposition::Element { name } => {
                let rendered = render_element_attributes(&value, &name);
                self.literal(&rendered);
            }
            Disposition::Attribute {
                element,
                name,
                quote,
            } => {
                let rendered = render_attribute_value(&value, &name, &element, quote);
                self.literal(&rendered);
            }
            Disposition::Comment => self.comment(&value.to_string()),
        }
    }

    /// Append text as a comment.
    ///
    /// Nested comment delimiters are stripped from the text and
    /// surrounding whitespace is trimmed, so an interpolated comment can
    /// neither close the enclosing comment early nor open a second one.
    /// Inside an open comment the trimmed text inserts bare; anywhere
    /// else it is wrapped as `<!-- text -->`.
    pub fn comment(&mut self, text: &str) {
        let text = text.replace("<!--", "").replace("-->", "");
        let text = text.trim();
        if matches!(self.disposition, Disposition::Comment) {
            self.literal(text);
        } else {
            self.literal(&format!("<!-- {text} -->"));
        }
    }

    /// Append markup verbatim, bypassing all escaping.
    ///
    /// The caller accepts responsibility for the safety of the string.
    /// The text still feeds the context parser like any literal, so
    /// subsequent fragments and values see correct state.
    pub fn raw(&mut self, markup: &str) {
        self.literal(markup);
    }

    /// Finish the build and wrap the accumulated document.
    #[must_use]
    pub fn finish(self) -> HTML {
        HTML::new(self.content)
    }
}

impl Default for HTMLBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Text-disposition rendering.
fn render_text(value: &Value) -> String {
    match value {
        Value::Markup(markup) => markup.as_str().to_owned(),
        Value::List(items) => {
            let rendered: Vec<String> = items.iter().map(render_text).collect();
            rendered.join("\n")
        }
        other => escape_text(&other.to_string()),
    }
}

/// Element-disposition rendering: attribute sets, or escaped text.
fn render_element_attributes(value: &Value, element: &str) -> String {
    match value {
        Value::Map(entries) => serialize_attributes(entries, element),
        Value::List(items) if items.iter().all(|item| matches!(item, Value::Map(_))) => {
            let rendered: Vec<String> = items
                .iter()
                .map(|item| render_element_attributes(item, element))
                .collect();
            rendered.join(" ")
        }
        other => escape_text(&other.to_string()),
    }
}

/// Attribute-disposition rendering, including the quote-style escaping
/// rules.
///
/// Double quotes are escaped unless the opening quote is single, and an
/// unquoted position wraps the whole rendering in double quotes. The
/// conditional is deliberate, observable behavior: a single-quoted value
/// keeps its double quotes untouched.
fn render_attribute_value(
    value: &Value,
    attribute: &str,
    element: &str,
    quote: Option<QuotationMark>,
) -> String {
    let mut rendered = match attribute_value(attribute, element, value) {
        AttributeRendering::Text(text) => text,
        AttributeRendering::Bare => attribute.to_owned(),
        AttributeRendering::Omitted => value.to_string(),
    };

    if quote != Some(QuotationMark::Single) {
        rendered = rendered.replace('"', "\\\"");
    }
    if quote.is_none() {
        rendered = format!("\"{rendered}\"");
    }
    rendered
}
