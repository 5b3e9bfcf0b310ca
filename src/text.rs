/*
 * ==========================================================================
 * PARAMSHIFT - Flip Dart parameter lists
 * ==========================================================================
 *
 * File:     text.rs
 * Purpose:  Plain string utilities shared by the parser
 *
 * Everything here takes text and returns text (or offsets into it). None
 * of these helpers know anything about parameters.
 *
 *  - collapse_spaces      → runs of ' ' become a single ' '
 *  - trim_equals_spacing  → no blanks directly around '='
 *  - split_top_level      → comma split that respects nesting and quotes
 *  - find_matching        → balanced scan for a closing bracket
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

use once_cell::sync::Lazy;
use regex::Regex;

static SPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(" {2,}").unwrap());

static EQUALS_PADDING: Lazy<Regex> = Lazy::new(|| Regex::new("[ \t]*=[ \t]*").unwrap());

/// Replaces every run of space characters with a single space.
///
/// Only `' '` is affected; tabs and newlines are left alone.
///
/// ```text
/// "   white   space    " → " white space "
/// ```
pub fn collapse_spaces(text: &str) -> String {
    SPACE_RUN.replace_all(text, " ").into_owned()
}

/// Removes spaces and tabs directly before and after every `=`.
///
/// ```text
/// "a = 1, b  =2" → "a=1, b=2"
/// ```
pub fn trim_equals_spacing(text: &str) -> String {
    EQUALS_PADDING.replace_all(text, "=").into_owned()
}

/// Splits `text` on commas that sit at nesting depth zero.
///
/// Commas inside `()`, `[]`, `{}` or inside a quoted literal stay part of
/// their segment. `<>` only nests in the declaration part of a segment
/// (before its first top-level `=`), so `Map<String, int> m` stays whole
/// while a default such as `1 < 2` never swallows the next segment.
/// Segments are returned untrimmed.
pub fn split_top_level(text: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth: usize = 0;
    let mut angle_depth: usize = 0;
    let mut in_declaration = true;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut start = 0;

    for (idx, ch) in text.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == q {
                quote = None;
            }
            continue;
        }

        match ch {
            '"' | '\'' => quote = Some(ch),
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            '<' if in_declaration => angle_depth += 1,
            '>' if in_declaration => angle_depth = angle_depth.saturating_sub(1),

            // The default value starts here; type arguments are over.
            '=' if depth == 0 => {
                in_declaration = false;
                angle_depth = 0;
            }

            ',' if depth == 0 && angle_depth == 0 => {
                segments.push(&text[start..idx]);
                start = idx + 1;
                in_declaration = true;
            }
            _ => {}
        }
    }

    segments.push(&text[start..]);
    segments
}

/// Finds the byte offset of the bracket closing the one at `open_at`.
///
/// `text[open_at..]` must start with `open`. Brackets of the same kind
/// nest; quoted literals are skipped. Returns `None` when the bracket is
/// never closed.
pub fn find_matching(text: &str, open_at: usize, open: char, close: char) -> Option<usize> {
    let mut depth: usize = 0;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (offset, ch) in text[open_at..].char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == q {
                quote = None;
            }
            continue;
        }

        if ch == '"' || ch == '\'' {
            quote = Some(ch);
        } else if ch == open {
            depth += 1;
        } else if ch == close {
            depth -= 1;
            if depth == 0 {
                return Some(open_at + offset);
            }
        }
    }

    None
}
