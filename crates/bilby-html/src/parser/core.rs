use bilby_common::warning::warn_once;
use strum::EnumCount;
use strum_macros::{Display, EnumCount as EnumCountMacro};

use super::disposition::{Disposition, QuotationMark};

/// The incremental context-classification state machine.
///
/// One state is active at any time; it is mutated only by feeding
/// characters through the transition function, and it never rewinds past
/// characters already consumed. A transition may re-dispatch the same
/// character against a new state ("reconsume"), but re-entry is bounded,
/// keeping the pass linear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumCountMacro)]
pub(crate) enum ParserState {
    /// Free text. `<` opens a tag.
    Text,
    /// Just after `<`, before the construct kind is known.
    TagOpen,
    /// Accumulating an element name.
    ElementName,
    /// Inside a start tag, after the element name.
    AfterElementName,
    /// Accumulating an attribute name.
    AttributeName,
    /// After an attribute name, before `=`, a new name, or tag close.
    AfterAttributeName,
    /// Just after `=`, before the value's quoting style is known.
    BeforeAttributeValue,
    /// Inside an attribute value with the given quoting, or unquoted.
    AttributeValue(Option<QuotationMark>),
    /// Just after a quoted attribute value closed.
    AfterAttributeValue,
    /// Just after `/` inside a start tag.
    SelfClosingTag,
    /// Just after `<!--`, possibly still consuming leading dashes.
    BeforeComment,
    /// Inside a comment, up to `-->`.
    Comment,
    /// Inside a construct we accept but do not track (`<!…`, `<?…`),
    /// consumed opaquely up to the next `>`.
    UnsupportedConstruct,
}

/// Classifies interpolation sites in a document built from literal
/// fragments.
///
/// Feed each literal fragment in document order with [`feed`]; the
/// returned [`Disposition`] is the context the *next* interpolated value
/// lands in. One instance is exclusively owned by one in-progress
/// document build; state threads sequentially across calls.
///
/// The parser never fails. Malformed or truncated markup degrades to the
/// nearest sensible disposition, typically [`Disposition::Text`], where
/// the dispatcher escapes fully. Misclassification must bias toward more
/// escaping, never less; that is a safety invariant, not a bug to fix.
///
/// [`feed`]: ContextParser::feed
#[derive(Debug, Clone)]
pub struct ContextParser {
    pub(super) state: ParserState,
    /// Characters of the fragment currently being consumed.
    pub(super) buffer: Vec<char>,
    pub(super) position: usize,
    // When true, the current character is re-dispatched against the new
    // state instead of consuming the next one.
    pub(super) reconsume: bool,
    /// Element-name scratch buffer. Persists across fragments so a name
    /// interpolated in one fragment is still known in the next; cleared
    /// when a new tag starts and on self-closing tag close.
    pub(super) element_name: String,
    /// Attribute-name scratch buffer. Cleared when a new attribute name
    /// starts and when an attribute value completes.
    pub(super) attribute_name: String,
}

impl ContextParser {
    /// Create a parser in the initial free-text state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: ParserState::Text,
            buffer: Vec::new(),
            position: 0,
            reconsume: false,
            element_name: String::new(),
            attribute_name: String::new(),
        }
    }

    /// Consume one literal fragment and report the disposition in effect
    /// immediately after its last character.
    ///
    /// Must be called once per fragment, in document order. Lookahead
    /// (comment delimiters, `/>` markers) is limited to the current
    /// fragment; a delimiter split across fragments is not recognized,
    /// which only ever degrades toward a more conservative disposition.
    pub fn feed(&mut self, fragment: &str) -> Disposition {
        self.buffer = fragment.chars().collect();
        self.position = 0;
        self.reconsume = false;

        while let Some(character) = self.consume() {
            self.process(character);
        }

        self.disposition()
    }

    /// Dispatch one character, following reconsume transitions until the
    /// character has been accounted for.
    ///
    /// Each reconsume moves to a different state, so the number of states
    /// bounds the loop; the budget keeps that linearity auditable.
    fn process(&mut self, character: char) {
        for _ in 0..ParserState::COUNT {
            self.reconsume = false;
            match self.state {
                ParserState::Text => self.handle_text_state(character),
                ParserState::TagOpen => self.handle_tag_open_state(character),
                ParserState::ElementName => self.handle_element_name_state(character),
                ParserState::AfterElementName => self.handle_after_element_name_state(character),
                ParserState::AttributeName => self.handle_attribute_name_state(character),
                ParserState::AfterAttributeName => {
                    self.handle_after_attribute_name_state(character);
                }
                ParserState::BeforeAttributeValue => {
                    self.handle_before_attribute_value_state(character);
                }
                ParserState::AttributeValue(quote) => {
                    self.handle_attribute_value_state(character, quote);
                }
                ParserState::AfterAttributeValue => {
                    self.handle_after_attribute_value_state(character);
                }
                ParserState::SelfClosingTag => self.handle_self_closing_tag_state(character),
                ParserState::BeforeComment => self.handle_before_comment_state(character),
                ParserState::Comment => self.handle_comment_state(),
                ParserState::UnsupportedConstruct => {
                    self.handle_unsupported_construct_state(character);
                }
            }
            if !self.reconsume {
                return;
            }
        }
        debug_assert!(!self.reconsume, "reconsume budget exhausted in {}", self.state);
    }

    /// Free text: `<` opens a tag, everything else stays text.
    fn handle_text_state(&mut self, character: char) {
        if character == '<' {
            self.switch_to(ParserState::TagOpen);
        }
    }

    /// Just after `<`: classify the construct.
    fn handle_tag_open_state(&mut self, character: char) {
        match character {
            '!' => {
                if self.next_few_characters_are("--") {
                    self.skip(2);
                    self.switch_to(ParserState::BeforeComment);
                } else {
                    warn_once(
                        "Markup",
                        "markup declaration other than a comment consumed without context tracking",
                    );
                    self.switch_to(ParserState::UnsupportedConstruct);
                }
            }
            '/' => {
                // "</>" is an empty closing tag marker and contributes
                // nothing; a named closing tag degrades to text, which is
                // also where it leaves the context.
                if self.next_few_characters_are(">") {
                    self.skip(1);
                    self.switch_to(ParserState::Text);
                } else {
                    self.reconsume_in(ParserState::Text);
                }
            }
            'a'..='z' | 'A'..='Z' | '-' => {
                self.element_name.clear();
                self.attribute_name.clear();
                self.reconsume_in(ParserState::ElementName);
            }
            '?' => {
                warn_once(
                    "Markup",
                    "processing instruction consumed without context tracking",
                );
                self.reconsume_in(ParserState::UnsupportedConstruct);
            }
            _ => self.reconsume_in(ParserState::Text),
        }
    }

    /// Accumulating the element name.
    fn handle_element_name_state(&mut self, character: char) {
        match character {
            c if c.is_whitespace() => self.switch_to(ParserState::AfterElementName),
            '/' => self.switch_to(ParserState::SelfClosingTag),
            '>' => self.switch_to(ParserState::Text),
            _ => self.element_name.push(character),
        }
    }

    /// After the element name, expecting attributes or tag close.
    fn handle_after_element_name_state(&mut self, character: char) {
        match character {
            c if c.is_whitespace() => {}
            '/' | '>' => self.reconsume_in(ParserState::AfterAttributeName),
            '=' => self.switch_to(ParserState::BeforeAttributeValue),
            _ => {
                self.attribute_name.clear();
                self.reconsume_in(ParserState::AttributeName);
            }
        }
    }

    /// Accumulating an attribute name.
    fn handle_attribute_name_state(&mut self, character: char) {
        match character {
            c if c == '/' || c == '>' || c.is_whitespace() => {
                self.reconsume_in(ParserState::AfterAttributeName);
            }
            '=' => self.switch_to(ParserState::BeforeAttributeValue),
            _ => self.attribute_name.push(character),
        }
    }

    /// After an attribute name, expecting `=`, another attribute, or tag
    /// close.
    fn handle_after_attribute_name_state(&mut self, character: char) {
        match character {
            c if c.is_whitespace() => {}
            '/' => self.switch_to(ParserState::SelfClosingTag),
            '=' => self.switch_to(ParserState::BeforeAttributeValue),
            '>' => self.switch_to(ParserState::Text),
            _ => {
                self.attribute_name.clear();
                self.reconsume_in(ParserState::AttributeName);
            }
        }
    }

    /// After `=`, classifying the value's quoting style.
    fn handle_before_attribute_value_state(&mut self, character: char) {
        match character {
            c if c.is_whitespace() => {}
            '>' => self.switch_to(ParserState::Text),
            _ => match QuotationMark::from_character(character) {
                Some(mark) => self.switch_to(ParserState::AttributeValue(Some(mark))),
                None => self.reconsume_in(ParserState::AttributeValue(None)),
            },
        }
    }

    /// Inside an attribute value.
    fn handle_attribute_value_state(&mut self, character: char, quote: Option<QuotationMark>) {
        match quote {
            Some(mark) => {
                if character == mark.character() {
                    self.attribute_name.clear();
                    self.switch_to(ParserState::AfterAttributeValue);
                }
            }
            None => match character {
                c if c.is_whitespace() => {
                    self.attribute_name.clear();
                    self.switch_to(ParserState::AfterAttributeValue);
                }
                '>' => self.switch_to(ParserState::Text),
                _ => {}
            },
        }
    }

    /// Just after a quoted attribute value closed.
    fn handle_after_attribute_value_state(&mut self, character: char) {
        match character {
            c if c.is_whitespace() => self.switch_to(ParserState::AfterElementName),
            '/' => self.switch_to(ParserState::SelfClosingTag),
            '>' => self.switch_to(ParserState::Text),
            _ => self.reconsume_in(ParserState::AfterElementName),
        }
    }

    /// Just after `/` inside a start tag.
    fn handle_self_closing_tag_state(&mut self, character: char) {
        match character {
            '>' => {
                self.element_name.clear();
                self.attribute_name.clear();
                self.switch_to(ParserState::Text);
            }
            _ => self.reconsume_in(ParserState::AfterElementName),
        }
    }

    /// Just after `<!--`, possibly consuming further dashes.
    fn handle_before_comment_state(&mut self, character: char) {
        match character {
            '-' => {}
            '>' => self.switch_to(ParserState::Text),
            _ => self.reconsume_in(ParserState::Comment),
        }
    }

    /// Inside a comment: close when the characters after the current one
    /// spell `-->`.
    fn handle_comment_state(&mut self) {
        if self.next_few_characters_are("-->") {
            self.skip(3);
            self.switch_to(ParserState::Text);
        }
    }

    /// Inside an untracked construct: consume everything up to `>`.
    fn handle_unsupported_construct_state(&mut self, character: char) {
        if character == '>' {
            self.switch_to(ParserState::Text);
        }
    }

    /// Project the current state to its externally visible disposition.
    fn disposition(&self) -> Disposition {
        match self.state {
            ParserState::AfterElementName => Disposition::Element {
                name: self.element_name.clone(),
            },
            ParserState::AttributeValue(quote) => Disposition::Attribute {
                element: self.element_name.clone(),
                name: self.attribute_name.clone(),
                quote,
            },
            ParserState::BeforeAttributeValue | ParserState::AfterAttributeValue => {
                Disposition::Attribute {
                    element: self.element_name.clone(),
                    name: self.attribute_name.clone(),
                    quote: None,
                }
            }
            ParserState::Comment | ParserState::BeforeComment => Disposition::Comment,
            _ => Disposition::Text,
        }
    }
}

impl Default for ContextParser {
    fn default() -> Self {
        Self::new()
    }
}
