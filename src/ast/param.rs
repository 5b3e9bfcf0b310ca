/*
 * ==========================================================================
 * PARAMSHIFT - Flip Dart parameter lists
 * ==========================================================================
 *
 * File:     param.rs
 * Purpose:  Defines the structure for one formal function parameter
 *
 * A `FunctionParam` is produced by the signature parser and consumed by
 * both renderers. It supports:
 *  - Optional type annotations (`int x` vs dynamic `x`)
 *  - Default values, kept as the literal source text
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

use serde::{Deserialize, Serialize};

/// Represents **one declared parameter** of a function signature.
///
/// A parameter is required exactly when it has no default value. The type
/// annotation is independent of that: every combination of typed/dynamic
/// and required/optional is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionParam {
    /// Parameter name (identifier)
    pub name: String,

    /// Optional static type annotation:
    /// `foo(int x)` → `Some("int")`, `foo(x)` → `None`
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_annotation: Option<String>,

    /// Optional default value, verbatim:
    /// `foo([x = "a"])` → `Some("\"a\"")`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

impl FunctionParam {
    /// Generic constructor
    pub fn new(
        name: impl Into<String>,
        type_annotation: Option<String>,
        default_value: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            type_annotation,
            default_value,
        }
    }

    /// A parameter without a default value.
    pub fn required(name: impl Into<String>, type_annotation: Option<&str>) -> Self {
        Self::new(name, type_annotation.map(str::to_string), None)
    }

    /// A parameter carrying a default value.
    pub fn optional(
        name: impl Into<String>,
        type_annotation: Option<&str>,
        default_value: impl Into<String>,
    ) -> Self {
        Self::new(
            name,
            type_annotation.map(str::to_string),
            Some(default_value.into()),
        )
    }

    pub fn is_required(&self) -> bool {
        self.default_value.is_none()
    }
}
