/*
 * ==========================================================================
 * PARAMSHIFT - Flip Dart parameter lists
 * ==========================================================================
 *
 * File:     lexer/lexer.rs
 * Purpose:  Locates a function name and its parameter list in raw text
 *
 * The scan runs in two phases:
 *   1. Walk forward to each `(` and look left for an identifier, skipping
 *      spaces and tabs. The first `(` with an identifier wins, so any
 *      return type before the name (`void`, `Future<List<int>>`) is never
 *      inspected.
 *   2. From that `(`, run a balanced scan to the matching `)`.
 *
 * --------------------------------------------------------------------------
 * Author:   Sam Wilcox
 * Email:    sam@pawx-lang.com
 *
 * License:
 * This file is part of the PARAMSHIFT project.
 *
 * PARAMSHIFT is dual-licensed under the terms of:
 *   - The MIT License
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use log::trace;

use crate::error::ParseError;
use crate::lexer::keywords::is_keyword;
use crate::lexer::token::{ParamSpan, SignatureLocation};
use crate::span::Span;
use crate::text::find_matching;

/// Cursor over the characters of a raw signature.
pub struct Scanner<'a> {
    source: &'a str,

    /// `(byte offset, char)` pairs so results can slice `source` directly.
    chars: Vec<(usize, char)>,

    current: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().collect(),
            current: 0,
        }
    }

    /// Runs both scan phases and returns the first signature found.
    ///
    /// A control-flow keyword before `(` (`if (x)`) only wins when no
    /// ordinary identifier is followed by `(` anywhere in the text.
    ///
    /// # Errors
    /// - `NoFunctionFound` when no `(` has an identifier directly before it
    /// - `UnclosedParameterList` when the winning `(` is never matched
    pub fn locate(&mut self) -> Result<SignatureLocation, ParseError> {
        // First keyword match, kept in case nothing better turns up.
        let mut keyword_match: Option<Result<SignatureLocation, ParseError>> = None;

        while !self.is_at_end() {
            let (offset, ch) = self.advance();

            if ch != '(' {
                continue;
            }

            // Phase 1: an identifier must sit directly left of the paren.
            let Some((name, name_start)) = self.identifier_before(self.current - 1) else {
                continue;
            };

            if is_keyword(&name) {
                trace!("keyword `{}` before `(`, looking further", name);
                if keyword_match.is_none() {
                    keyword_match = Some(self.signature_at(name, name_start, offset));
                }
                continue;
            }

            // Phase 2: balanced scan to the closing paren.
            return self.signature_at(name, name_start, offset);
        }

        keyword_match.unwrap_or(Err(ParseError::NoFunctionFound))
    }

    /// Builds the location for `name` whose list opens at byte `open_at`.
    fn signature_at(
        &self,
        name: String,
        name_start: usize,
        open_at: usize,
    ) -> Result<SignatureLocation, ParseError> {
        let Some(close) = find_matching(self.source, open_at, '(', ')') else {
            return Err(ParseError::UnclosedParameterList {
                name,
                span: Span::from_offset(self.source, open_at),
            });
        };

        Ok(SignatureLocation {
            name,
            name_span: Span::from_offset(self.source, name_start),
            params: ParamSpan {
                start: open_at + 1,
                end: close,
            },
        })
    }

    /// Reads the identifier ending just left of `paren_idx`, after
    /// skipping horizontal whitespace. Returns the name and the byte
    /// offset where it starts.
    fn identifier_before(&self, paren_idx: usize) -> Option<(String, usize)> {
        let mut idx = paren_idx;

        while idx > 0 && matches!(self.chars[idx - 1].1, ' ' | '\t') {
            idx -= 1;
        }

        let end = idx;
        while idx > 0 && is_word_char(self.chars[idx - 1].1) {
            idx -= 1;
        }

        if idx == end {
            return None;
        }

        let start_byte = self.chars[idx].0;
        let end_byte = self.chars[end - 1].0 + self.chars[end - 1].1.len_utf8();

        Some((self.source[start_byte..end_byte].to_string(), start_byte))
    }

    /// Advances the cursor by one character.
    ///
    /// Caller must ensure the end has not been reached.
    fn advance(&mut self) -> (usize, char) {
        let item = self.chars[self.current];
        self.current += 1;
        item
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Public entry point for the location phase.
///
/// ```rust
/// use paramshift::lexer::locate_signature;
///
/// let raw = "Future<void> load(int id) {}";
/// let location = locate_signature(raw).unwrap();
/// assert_eq!(location.name, "load");
/// assert_eq!(location.param_text(raw), "int id");
/// ```
pub fn locate_signature(source: &str) -> Result<SignatureLocation, ParseError> {
    Scanner::new(source).locate()
}
