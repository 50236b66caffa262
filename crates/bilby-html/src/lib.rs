//! Context-aware HTML construction with automatic escaping.
//!
//! # Scope
//!
//! This crate builds HTML documents from a sequence of literal fragments
//! interleaved with typed values, applying context-dependent encoding so
//! an interpolated value can never break out of, or inject into, the
//! structural position it lands in:
//!
//! - **Context Parser** - an incremental state machine that classifies
//!   each interpolation site (text, inside a start tag, inside an
//!   attribute value with a given quoting style, inside a comment)
//!   one literal fragment at a time, with no lookahead beyond the
//!   fragment and no backtracking
//! - **Interpolation Dispatcher** - selects entity escaping, attribute
//!   serialization, or verbatim insertion from the parser's output
//! - **Attribute Serializer** - deterministic, sorted `key="value"`
//!   rendering of structured values, including boolean-attribute rules
//!   and `aria`/`data` group expansion
//!
//! # Safety stance
//!
//! There is no error channel. Malformed markup, unterminated tags, and
//! unterminated comments are all accepted; ambiguous context degrades to
//! the classification that escapes *more*, never less. The only way to
//! insert unescaped text is the explicit [`HTMLBuilder::raw`] bypass.
//!
//! # Not implemented (by design)
//!
//! - Well-formedness validation or DOM construction
//! - Entity decoding; the escape table only ever encodes
//! - Tracking of DOCTYPE, CDATA, or processing instructions beyond
//!   consuming them opaquely

/// Canonical attribute-string serialization and boolean-attribute rules.
pub mod attributes;
/// The document builder and interpolation dispatcher.
pub mod builder;
/// Entity-reference escaping for text contexts.
pub mod escape;
/// The trusted markup wrapper type.
pub mod html;
/// The `html!` convenience macro.
pub mod macros;
/// The incremental context-classification parser.
pub mod parser;
/// The interpolation value model.
pub mod value;

pub use attributes::{AttributeRendering, BOOLEAN_ATTRIBUTES, attribute_value, serialize_attributes};
pub use builder::HTMLBuilder;
pub use escape::{ENTITIES, escape_text};
pub use html::HTML;
pub use parser::{ContextParser, Disposition, QuotationMark};
pub use value::Value;
