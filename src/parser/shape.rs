/*
 * ==========================================================================
 * PARAMSHIFT - Flip Dart parameter lists
 * ==========================================================================
 *
 * File:     parser/shape.rs
 * Purpose:  Classifies parameter-list text into one of three shapes
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

use crate::text::find_matching;

/// The syntactic shape of a parameter list.
///
/// Named and bracketed-optional blocks never appear together, so exactly
/// one variant describes any list. Each variant borrows the slices of the
/// original text that its parsing rule needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamShape<'a> {
    /// `int a, b`
    Positional(&'a str),

    /// `int a, [int b = 1]`
    ///
    /// `required` is everything before the first `[`, `optional` is the
    /// text inside the brackets.
    PositionalWithOptional { required: &'a str, optional: &'a str },

    /// `{required int a, b = 1}`
    ///
    /// `leading` is everything before the first `{` (normally empty),
    /// `named` is the text inside the braces.
    Named { leading: &'a str, named: &'a str },
}

/// Picks the shape of `text`. A `{` anywhere wins over a `[`.
pub fn classify(text: &str) -> ParamShape<'_> {
    if let Some((leading, named)) = split_block(text, '{', '}') {
        return ParamShape::Named { leading, named };
    }

    if let Some((required, optional)) = split_block(text, '[', ']') {
        return ParamShape::PositionalWithOptional { required, optional };
    }

    ParamShape::Positional(text)
}

/// Splits `text` at the first `open` into the prefix and the block body.
///
/// An unclosed block runs to the end of the text.
fn split_block(text: &str, open: char, close: char) -> Option<(&str, &str)> {
    let open_at = text.find(open)?;
    let close_at = find_matching(text, open_at, open, close).unwrap_or(text.len());

    Some((&text[..open_at], &text[open_at + open.len_utf8()..close_at]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_list_is_positional() {
        assert_eq!(classify("int a, b"), ParamShape::Positional("int a, b"));
        assert_eq!(classify(""), ParamShape::Positional(""));
    }

    #[test]
    fn brackets_mean_optional_block() {
        assert_eq!(
            classify("int a, [int b=1, c]"),
            ParamShape::PositionalWithOptional {
                required: "int a, ",
                optional: "int b=1, c",
            }
        );
    }

    #[test]
    fn braces_mean_named_block() {
        assert_eq!(
            classify("{required int a, b = 1,}"),
            ParamShape::Named {
                leading: "",
                named: "required int a, b = 1,",
            }
        );
    }

    #[test]
    fn braces_take_priority_over_brackets() {
        assert_eq!(
            classify("{List<int> a = const [1]}"),
            ParamShape::Named {
                leading: "",
                named: "List<int> a = const [1]",
            }
        );
    }

    #[test]
    fn optional_block_ends_at_matching_bracket() {
        assert_eq!(
            classify("[List<int> xs = const [1, 2]], "),
            ParamShape::PositionalWithOptional {
                required: "",
                optional: "List<int> xs = const [1, 2]",
            }
        );
    }

    #[test]
    fn unclosed_block_runs_to_end() {
        assert_eq!(
            classify("a, [b = 1"),
            ParamShape::PositionalWithOptional {
                required: "a, ",
                optional: "b = 1",
            }
        );
    }
}
