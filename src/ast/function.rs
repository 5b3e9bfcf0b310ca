/*
 * ==========================================================================
 * PARAMSHIFT - Flip Dart parameter lists
 * ==========================================================================
 *
 * File:     function.rs
 * Purpose:  A parsed function signature (name + ordered parameter list)
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

use crate::ast::param::FunctionParam;

/// One parsed signature.
///
/// `params` keeps declaration order. Positional rendering depends on that
/// order and named rendering keeps it for deterministic output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDefinition {
    pub function_name: String,
    pub params: Vec<FunctionParam>,
}

impl FunctionDefinition {
    pub fn new(function_name: impl Into<String>, params: Vec<FunctionParam>) -> Self {
        Self {
            function_name: function_name.into(),
            params,
        }
    }
}
