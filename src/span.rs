/*
 * ==========================================================================
 * PARAMSHIFT - Flip Dart parameter lists
 * ==========================================================================
 *
 * Author:   Sam Wilcox
 * Email:    sam@pawx-lang.com
 *
 * License:
 * This file is part of the PARAMSHIFT project.
 *
 * PARAMSHIFT is dual-licensed under the terms of:
 *   - The MIT license
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

/// A location inside raw signature text.
///
/// `line` is 1-based, `column` is the 0-based character offset within
/// that line (the diagnostic printer adds one when displaying it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub line: usize,
    pub column: usize,
}

impl Span {
    /// Computes the line/column of a byte offset into `source`.
    ///
    /// Offsets past the end clamp to the end of the text.
    pub fn from_offset(source: &str, offset: usize) -> Self {
        let offset = offset.min(source.len());
        let mut line = 1;
        let mut column = 0;

        for ch in source[..offset].chars() {
            if ch == '\n' {
                line += 1;
                column = 0;
            } else {
                column += 1;
            }
        }

        Self { line, column }
    }
}
