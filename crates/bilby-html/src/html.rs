use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// An immutable wrapper around a raw, already-safe HTML string.
///
/// The invariant carried by this type: the wrapped content is always safe
/// to concatenate directly into an output document. No further escaping is
/// ever applied to it. Construct one only from a trusted string, or as the
/// result of a [`crate::HTMLBuilder`] run, which escapes interpolated
/// values before they reach the wrapper.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HTML {
    content: String,
}

impl HTML {
    /// Wrap a trusted string as HTML.
    ///
    /// The caller vouches that `content` is already safe markup; it will be
    /// spliced into documents verbatim.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// The wrapped markup as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Consume the wrapper and return the markup string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.content
    }
}

impl fmt::Display for HTML {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.content)
    }
}

impl FromStr for HTML {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for HTML {
    fn from(content: &str) -> Self {
        Self::new(content)
    }
}

impl From<String> for HTML {
    fn from(content: String) -> Self {
        Self::new(content)
    }
}

impl AsRef<str> for HTML {
    fn as_ref(&self) -> &str {
        &self.content
    }
}
