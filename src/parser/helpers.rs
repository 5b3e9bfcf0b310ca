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

use crate::ast::FunctionParam;
use crate::text::{collapse_spaces, split_top_level, trim_equals_spacing};

/// Keyword marking a named parameter as required. It carries no
/// information beyond the missing default value.
const REQUIRED_KEYWORD: &str = "required";

/// Collapses spaces, splits on top-level commas, trims, and drops the
/// empty segments left by trailing commas.
pub fn segments(text: &str) -> Vec<String> {
    split_top_level(&collapse_spaces(text))
        .into_iter()
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Like `segments`, but with blanks around `=` removed first so every
/// segment reads `decl` or `decl=value`.
pub fn default_value_segments(text: &str) -> Vec<String> {
    segments(&trim_equals_spacing(&collapse_spaces(text)))
}

/// Splits a declaration into `(type, name)`.
///
/// The name is the last whitespace-separated token. Anything before it is
/// the type, so `Map<String, int> m` keeps its full generic type.
pub fn split_type_and_name(decl: &str) -> (Option<String>, String) {
    let decl = decl.trim();

    match decl.rsplit_once(char::is_whitespace) {
        Some((ty, name)) if !ty.trim().is_empty() => {
            (Some(ty.trim().to_string()), name.to_string())
        }
        _ => (None, decl.to_string()),
    }
}

/// Drops a leading `required` keyword from a named declaration.
pub fn strip_required(decl: &str) -> &str {
    match decl.strip_prefix(REQUIRED_KEYWORD) {
        Some(rest) if rest.starts_with(char::is_whitespace) => rest.trim_start(),
        _ => decl,
    }
}

/// Builds a parameter from `decl` or `decl=value`.
pub fn param_with_default(segment: &str) -> FunctionParam {
    let (decl, default_value) = match segment.split_once('=') {
        Some((decl, value)) => (decl, Some(value.trim().to_string())),
        None => (segment, None),
    };

    let (type_annotation, name) = split_type_and_name(decl);
    FunctionParam::new(name, type_annotation, default_value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_drop_empty_and_trim() {
        assert_eq!(
            segments("  int   a,\n  int b,  "),
            vec!["int a".to_string(), "int b".to_string()]
        );
        assert!(segments("   ").is_empty());
    }

    #[test]
    fn default_value_segments_normalize_equals() {
        assert_eq!(
            default_value_segments("a = 1,  b  =  \"x\","),
            vec!["a=1".to_string(), "b=\"x\"".to_string()]
        );
    }

    #[test]
    fn type_and_name() {
        assert_eq!(split_type_and_name("a"), (None, "a".to_string()));
        assert_eq!(
            split_type_and_name("int a"),
            (Some("int".to_string()), "a".to_string())
        );
        assert_eq!(
            split_type_and_name("Map<String, int>\tm"),
            (Some("Map<String, int>".to_string()), "m".to_string())
        );
    }

    #[test]
    fn strips_only_the_keyword() {
        assert_eq!(strip_required("required int a"), "int a");
        assert_eq!(strip_required("required a"), "a");
        assert_eq!(strip_required("requiredness"), "requiredness");
        assert_eq!(strip_required("int required_a"), "int required_a");
    }

    #[test]
    fn param_with_and_without_default() {
        assert_eq!(
            param_with_default("int foo=1"),
            FunctionParam::optional("foo", Some("int"), "1")
        );
        assert_eq!(
            param_with_default("foo2=\"2\""),
            FunctionParam::optional("foo2", None, "\"2\"")
        );
        assert_eq!(param_with_default("foo"), FunctionParam::required("foo", None));
        assert_eq!(
            param_with_default("s=\"a=b\""),
            FunctionParam::optional("s", None, "\"a=b\"")
        );
    }
}
