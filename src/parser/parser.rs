/*
 * ==========================================================================
 * PARAMSHIFT - Flip Dart parameter lists
 * ==========================================================================
 *
 * Signature Parser Entry Point
 *
 * This file defines the public `parse_function()` driver that turns raw,
 * loosely formatted signature text into a `FunctionDefinition`.
 *
 * The work is split across:
 * - `lexer`       → locating the name and the parameter span
 * - `shape.rs`    → classifying the span (positional / optional / named)
 * - `helpers.rs`  → segment splitting and per-segment parsing
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

use log::debug;

use crate::ast::{FunctionDefinition, FunctionParam};
use crate::error::ParseError;
use crate::lexer::locate_signature;
use crate::parser::helpers::{
    default_value_segments, param_with_default, segments, split_type_and_name, strip_required,
};
use crate::parser::shape::{classify, ParamShape};

/// Public entry point for signature parsing.
///
/// Only the text up to the parameter list's closing `)` matters; a return
/// type before the name and a body after the list are ignored.
///
/// # Pipeline
/// ```text
/// raw text → locate name + span → classify shape → parse segments
/// ```
///
/// # Example
/// ```rust
/// use paramshift::{parse_function, FunctionParam};
///
/// let def = parse_function("void foo(int a, [b = 2]) {}").unwrap();
/// assert_eq!(def.function_name, "foo");
/// assert_eq!(
///     def.params,
///     vec![
///         FunctionParam::required("a", Some("int")),
///         FunctionParam::optional("b", None, "2"),
///     ]
/// );
/// ```
///
/// # Errors
/// `ParseError` when no identifier followed by a closed parameter list
/// can be found.
pub fn parse_function(raw: &str) -> Result<FunctionDefinition, ParseError> {
    let location = locate_signature(raw)?;
    let params = parse_params(location.param_text(raw));

    debug!(
        "parsed `{}` with {} parameter(s)",
        location,
        params.len()
    );

    Ok(FunctionDefinition::new(location.name, params))
}

/// Parses the text between a signature's parentheses.
///
/// Empty (or all-whitespace) text yields an empty list.
pub fn parse_params(text: &str) -> Vec<FunctionParam> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let shape = classify(text);
    debug!("parameter list shape: {:?}", shape);

    match shape {
        ParamShape::Positional(list) => positional_params(list),

        ParamShape::PositionalWithOptional { required, optional } => {
            let mut params = positional_params(required);
            params.extend(optional_params(optional));
            params
        }

        ParamShape::Named { leading, named } => {
            let mut params = positional_params(leading);
            params.extend(named_params(named));
            params
        }
    }
}

/// `type name` or `name`, always required.
fn positional_params(text: &str) -> Vec<FunctionParam> {
    segments(text)
        .iter()
        .map(|segment| {
            let (type_annotation, name) = split_type_and_name(segment);
            FunctionParam::new(name, type_annotation, None)
        })
        .collect()
}

/// Contents of a `[...]` block.
fn optional_params(text: &str) -> Vec<FunctionParam> {
    default_value_segments(text)
        .iter()
        .map(|segment| param_with_default(segment))
        .collect()
}

/// Contents of a `{...}` block.
fn named_params(text: &str) -> Vec<FunctionParam> {
    default_value_segments(text)
        .iter()
        .map(|segment| param_with_default(strip_required(segment)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_list_is_empty() {
        assert!(parse_params(" \n\t ").is_empty());
    }

    #[test]
    fn positional_prefix_comes_before_optional_block() {
        assert_eq!(
            parse_params("a, int b, [c = 1, int d]"),
            vec![
                FunctionParam::required("a", None),
                FunctionParam::required("b", Some("int")),
                FunctionParam::optional("c", None, "1"),
                FunctionParam::required("d", Some("int")),
            ]
        );
    }

    #[test]
    fn leading_positional_before_named_block() {
        assert_eq!(
            parse_params("BuildContext context, {Key? key, int count = 0}"),
            vec![
                FunctionParam::required("context", Some("BuildContext")),
                FunctionParam::required("key", Some("Key?")),
                FunctionParam::optional("count", Some("int"), "0"),
            ]
        );
    }

    #[test]
    fn named_block_discards_required_keyword() {
        assert_eq!(
            parse_params("{required int a, required b}"),
            vec![
                FunctionParam::required("a", Some("int")),
                FunctionParam::required("b", None),
            ]
        );
    }
}
