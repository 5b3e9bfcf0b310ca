/*
 * ==========================================================================
 * PARAMSHIFT - Flip Dart parameter lists
 * ==========================================================================
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

use std::fmt;
use std::ops::Range;

use crate::span::Span;

/// Byte range of a parameter list inside the raw text, **excluding**
/// the surrounding parentheses.
///
/// ```text
/// void foo(int a) {}
///          ^^^^^
///          start..end
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpan {
    pub start: usize,
    pub end: usize,
}

impl ParamSpan {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Where a function signature sits inside raw text.
///
/// Produced by the scanner and consumed by the parser, which only ever
/// looks at `name` and the text covered by `params`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureLocation {
    /// The identifier directly before `(`.
    pub name: String,

    /// Line/column of the first character of `name`.
    pub name_span: Span,

    /// The text between `(` and its matching `)`.
    pub params: ParamSpan,
}

impl SignatureLocation {
    /// Returns the parameter-list text this location covers in `raw`.
    ///
    /// `raw` must be the same text the location was scanned from.
    pub fn param_text<'a>(&self, raw: &'a str) -> &'a str {
        &raw[self.params.range()]
    }
}

impl fmt::Display for SignatureLocation {
    /// Prints just the function name, which is what users recognise in
    /// log lines and messages.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
