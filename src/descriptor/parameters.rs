//! Lazy tokenization of the parameter section of a method descriptor.
use std::iter::FusedIterator;

use crate::{Error, Result};

/// A forward-only cursor over the parameter type tokens of a method descriptor.
///
/// Created by [`DescriptorParser::parameters`](super::DescriptorParser::parameters). Each token
/// is a slice of the descriptor, e.g., `I`, `Ljava/lang/String;`, or `[[D`.
/// Grammar violations are reported when the cursor reaches them, after which the iteration
/// stops.
#[derive(Debug)]
pub struct Parameters<'a> {
    descriptor: &'a str,
    index: usize,
    failed: bool,
}

impl<'a> Parameters<'a> {
    /// Creates a cursor positioned right after the opening `(` of `descriptor`.
    pub(super) fn new(descriptor: &'a str) -> Self {
        Self {
            descriptor,
            index: 1,
            failed: false,
        }
    }

    /// Checks whether another item, either a token or an error, will be produced.
    /// Running off the end of the descriptor before the closing `)` counts as one more item,
    /// namely the error reporting it.
    #[must_use]
    pub fn has_next(&self) -> bool {
        !self.failed && self.descriptor.as_bytes().get(self.index) != Some(&b')')
    }

    fn next_token(&mut self) -> Result<&'a str> {
        let bytes = self.descriptor.as_bytes();
        let start = self.index;
        let mut cursor = start;
        loop {
            match bytes.get(cursor) {
                Some(b'B' | b'C' | b'D' | b'F' | b'I' | b'J' | b'S' | b'Z') => {
                    cursor += 1;
                    break;
                }
                Some(b'L') => {
                    let semicolon = self.descriptor[cursor..].find(';').ok_or_else(|| {
                        Error::malformed(self.descriptor, cursor, "unterminated class type")
                    })?;
                    cursor += semicolon + 1;
                    break;
                }
                // Array dimensions belong to the token of their element type.
                Some(b'[') => cursor += 1,
                Some(b')') => Err(Error::malformed(
                    self.descriptor,
                    cursor,
                    "missing array element type",
                ))?,
                Some(_) => Err(Error::malformed(
                    self.descriptor,
                    cursor,
                    "illegal parameter type",
                ))?,
                None => Err(Error::malformed(
                    self.descriptor,
                    cursor,
                    "missing ')' after parameters",
                ))?,
            }
        }
        self.index = cursor;
        Ok(&self.descriptor[start..cursor])
    }
}

impl<'a> Iterator for Parameters<'a> {
    type Item = Result<&'a str>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_next() {
            return None;
        }
        let token = self.next_token();
        self.failed = token.is_err();
        Some(token)
    }
}

impl FusedIterator for Parameters<'_> {}
