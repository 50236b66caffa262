use core::fmt;

/// The quoting character opening an attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuotationMark {
    /// `'`
    Single,
    /// `"`
    Double,
}

impl QuotationMark {
    /// The literal quote character.
    #[must_use]
    pub const fn character(self) -> char {
        match self {
            Self::Single => '\'',
            Self::Double => '"',
        }
    }

    /// Classify a character as a quotation mark, if it is one.
    #[must_use]
    pub const fn from_character(character: char) -> Option<Self> {
        match character {
            '\'' => Some(Self::Single),
            '"' => Some(Self::Double),
            _ => None,
        }
    }
}

impl fmt::Display for QuotationMark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Single => "'",
            Self::Double => "\"",
        })
    }
}

/// The externally observable parsing context at an interpolation site.
///
/// This is a read-only projection of the parser's internal state,
/// recomputed after each literal fragment. It is everything the
/// interpolation dispatcher needs: the fine-grained internal states are
/// deliberately not exposed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disposition {
    /// Free text between tags. The conservative default: anything
    /// ambiguous or malformed degrades here, where values are fully
    /// escaped.
    Text,
    /// Inside a start tag, after the element name, before or between
    /// attributes.
    Element {
        /// The element name accumulated so far.
        name: String,
    },
    /// Inside an attribute value, or immediately before one.
    Attribute {
        /// The name of the enclosing element.
        element: String,
        /// The attribute name. Empty when the value has already closed.
        name: String,
        /// The quote style opening the value, or `None` when unquoted or
        /// not yet determined.
        quote: Option<QuotationMark>,
    },
    /// Inside a comment.
    Comment,
}
