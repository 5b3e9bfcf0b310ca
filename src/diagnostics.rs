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

use crate::error::ParseError;
use crate::span::Span;

/// Renders compiler-style diagnostics for signature parse errors.
///
/// The output mirrors `rustc`, simplified and readable without color:
///
/// ```text
/// error[P0002]: parameter list of `foo` is never closed
///   --> <stdin>:1:9
///    |
///   1 | void foo(int a
///    |         ^
///
/// help: include the closing `)` of the parameter list in the selection
/// ```
pub struct DiagnosticPrinter {
    /// Full signature text the error refers to.
    source: String,

    /// Display name of the input (`<stdin>`, `<argument>`, ...).
    origin: String,
}

impl DiagnosticPrinter {
    pub fn new(origin: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            source: source.into(),
        }
    }

    /// Builds the diagnostic text for `error`.
    ///
    /// Errors without a location get only the header and help lines.
    pub fn render(&self, error: &ParseError) -> String {
        // Header: stable code plus the human-readable message.
        let mut out = format!("error[{}]: {}\n", error.code(), error);

        match error.span() {
            Some(Span { line, column }) => {
                // Lines are 1-indexed in diagnostics, but `nth` is 0-indexed.
                // `saturating_sub` prevents underflow if line == 0.
                let src_line = self
                    .source
                    .lines()
                    .nth(line.saturating_sub(1))
                    .unwrap_or("");

                // Origin with line and 1-based column.
                out.push_str(&format!("  --> {}:{}:{}\n", self.origin, line, column + 1));
                out.push_str("   |\n");

                // The offending line, then a caret under the error column.
                out.push_str(&format!("{:>3} | {}\n", line, src_line));
                out.push_str(&format!("   | {}^\n", " ".repeat(column)));
            }

            // Nothing to point at, so name the input only.
            None => out.push_str(&format!("  --> {}\n", self.origin)),
        }

        out.push_str(&format!("\nhelp: {}", error.help()));
        out
    }

    /// Prints the diagnostic for `error` to stderr.
    pub fn print(&self, error: &ParseError) {
        eprintln!("{}", self.render(error));
    }
}
