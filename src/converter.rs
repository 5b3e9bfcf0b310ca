/*
 * ==========================================================================
 * PARAMSHIFT - Flip Dart parameter lists
 * ==========================================================================
 *
 * File:     converter.rs
 * Purpose:  Renders a parameter list in positional or named notation
 *
 * Both renderers run the same pipeline: a stable partition into required
 * and optional parameters, then per-parameter rendering. Only the
 * punctuation differs:
 *
 *  | Notation   | Required                 | Optional       | Wrapper          |
 *  |------------|--------------------------|----------------|------------------|
 *  | positional | `type name` / `name`     | `name = value` | optional in `[]` |
 *  | named      | `required type name`     | `name = value` | whole list `{}`  |
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

use crate::ast::{FunctionParam, Notation};
use crate::error::ParseError;
use crate::lexer::locate_signature;
use crate::parser::parse_params;

/// Splits `params` into `(required, optional)`, keeping the original
/// relative order inside each group.
fn partition(params: &[FunctionParam]) -> (Vec<&FunctionParam>, Vec<&FunctionParam>) {
    params.iter().partition(|param| param.is_required())
}

/// `type name`, or just `name` for dynamic parameters.
fn typed_name(param: &FunctionParam) -> String {
    match &param.type_annotation {
        Some(ty) => format!("{} {}", ty, param.name),
        None => param.name.clone(),
    }
}

/// `name = value`. Only called for optional parameters.
fn name_with_default(param: &FunctionParam) -> String {
    format!(
        "{} = {}",
        param.name,
        param.default_value.as_deref().unwrap_or_default()
    )
}

/// ============================================================================
/// to_positional_params
/// ============================================================================
/// Renders `params` as a positional list with a trailing `[...]` block for
/// the optional ones.
///
/// Examples:
///   - [a, int b]              → "a, int b"
///   - [a, c = 1]              → "a, [c = 1]"
///   - [c = 1, d = "x"]        → "[c = 1, d = \"x\"]"
///   - []                      → ""
/// ============================================================================
pub fn to_positional_params(params: &[FunctionParam]) -> String {
    let (required, optional) = partition(params);

    let required = required
        .into_iter()
        .map(typed_name)
        .collect::<Vec<_>>()
        .join(", ");

    let optional = if optional.is_empty() {
        String::new()
    } else {
        let inner = optional
            .into_iter()
            .map(name_with_default)
            .collect::<Vec<_>>()
            .join(", ");
        format!("[{}]", inner)
    };

    match (required.is_empty(), optional.is_empty()) {
        (false, false) => format!("{}, {}", required, optional),
        (false, true) => required,
        (true, _) => optional,
    }
}

/// ============================================================================
/// to_named_params
/// ============================================================================
/// Renders `params` as a `{...}` named list. Required parameters come
/// first and carry the `required` keyword.
///
/// Examples:
///   - [a, int b, c = 1]       → "{required a, required int b, c = 1}"
///   - []                      → "{}"
/// ============================================================================
pub fn to_named_params(params: &[FunctionParam]) -> String {
    let (required, optional) = partition(params);

    let rendered: Vec<String> = required
        .into_iter()
        .map(|param| format!("required {}", typed_name(param)))
        .chain(optional.into_iter().map(name_with_default))
        .collect();

    format!("{{{}}}", rendered.join(", "))
}

/// Renders `params` in the given notation.
pub fn render_params(params: &[FunctionParam], notation: Notation) -> String {
    match notation {
        Notation::Positional => to_positional_params(params),
        Notation::Named => to_named_params(params),
    }
}

/// Rewrites the parameter list of the signature in `raw` into `target`
/// notation, leaving every byte outside the parentheses untouched.
///
/// An empty parameter list stays empty in both notations.
///
/// ```rust
/// use paramshift::{convert_signature, Notation};
///
/// let out = convert_signature("void foo(int a, [b = 2]) {}", Notation::Named).unwrap();
/// assert_eq!(out, "void foo({required int a, b = 2}) {}");
/// ```
pub fn convert_signature(raw: &str, target: Notation) -> Result<String, ParseError> {
    let location = locate_signature(raw)?;
    let params = parse_params(location.param_text(raw));

    let rendered = if params.is_empty() {
        String::new()
    } else {
        render_params(&params, target)
    };

    debug!("converted `{}` to {} notation", location, target);

    let span = location.params;
    let mut out = String::with_capacity(raw.len() + rendered.len());
    out.push_str(&raw[..span.start]);
    out.push_str(&rendered);
    out.push_str(&raw[span.end..]);

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_required_only() {
        let params = vec![
            FunctionParam::required("param1", Some("int")),
            FunctionParam::required("param2", None),
        ];
        assert_eq!(to_positional_params(&params), "int param1, param2");
    }

    #[test]
    fn positional_optional_only() {
        let params = vec![
            FunctionParam::optional("param1", None, "\"foo\""),
            FunctionParam::optional("param2", Some("int"), "42"),
        ];
        assert_eq!(to_positional_params(&params), "[param1 = \"foo\", param2 = 42]");
    }

    #[test]
    fn positional_moves_optional_to_the_end() {
        let params = vec![
            FunctionParam::optional("param1", None, "\"foo\""),
            FunctionParam::optional("param2", None, "42"),
            FunctionParam::optional("param3", Some("int"), "123"),
            FunctionParam::required("param4", Some("int")),
        ];
        assert_eq!(
            to_positional_params(&params),
            "int param4, [param1 = \"foo\", param2 = 42, param3 = 123]"
        );
    }

    #[test]
    fn empty_lists() {
        assert_eq!(to_positional_params(&[]), "");
        assert_eq!(to_named_params(&[]), "{}");
    }

    #[test]
    fn named_mixed() {
        let params = vec![
            FunctionParam::required("param1", None),
            FunctionParam::required("param2", Some("int")),
            FunctionParam::optional("param3", None, "\"Foo\""),
        ];
        assert_eq!(
            to_named_params(&params),
            "{required param1, required int param2, param3 = \"Foo\"}"
        );
    }

    #[test]
    fn named_keeps_order_within_groups() {
        let params = vec![
            FunctionParam::optional("x", None, "1"),
            FunctionParam::required("a", None),
            FunctionParam::optional("y", None, "2"),
            FunctionParam::required("b", Some("int")),
        ];
        assert_eq!(
            to_named_params(&params),
            "{required a, required int b, x = 1, y = 2}"
        );
    }

    #[test]
    fn render_dispatches_on_notation() {
        let params = vec![FunctionParam::required("a", None)];
        assert_eq!(render_params(&params, Notation::Positional), "a");
        assert_eq!(render_params(&params, Notation::Named), "{required a}");
    }

    #[test]
    fn convert_keeps_surrounding_text() {
        assert_eq!(
            convert_signature("Future<void> foo({required a, b = 1}) async {}", Notation::Positional)
                .unwrap(),
            "Future<void> foo(a, [b = 1]) async {}"
        );
        assert_eq!(convert_signature("foo() {}", Notation::Named).unwrap(), "foo() {}");
    }

    #[test]
    fn convert_propagates_parse_errors() {
        assert_eq!(
            convert_signature("foo {}", Notation::Named),
            Err(ParseError::NoFunctionFound)
        );
    }
}
