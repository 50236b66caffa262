//! Incremental markup-context classification.
//!
//! A single-pass state machine that consumes literal fragments in order
//! and reports, after each fragment, the parsing context ([`Disposition`])
//! in effect at the point immediately following it. The state names
//! loosely follow the tokenizer states of the
//! [WHATWG HTML standard](https://html.spec.whatwg.org/multipage/parsing.html#tokenization),
//! collapsed to the handful of distinctions interpolation dispatch needs.
//!
//! This is not a full HTML parser: it validates nothing and builds
//! nothing, and malformed input never fails - it degrades to the most
//! conservative classification so escaping errs on the safe side.

/// The context parser state machine implementation.
pub mod core;
/// The externally visible classification of an interpolation site.
pub mod disposition;
/// Helper methods for state transitions and fragment input.
pub mod helpers;

pub use self::core::ContextParser;
pub use self::disposition::{Disposition, QuotationMark};
