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

use thiserror::Error;

use crate::span::Span;

/// Failure to pull a function signature out of raw text.
///
/// There is no partial result: a caller gets either a complete
/// `FunctionDefinition` or one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No identifier directly followed by `(` exists in the input.
    #[error("no function found")]
    NoFunctionFound,

    /// An identifier and `(` were found but the list never closes.
    #[error("parameter list of `{name}` is never closed")]
    UnclosedParameterList {
        name: String,

        /// Location of the opening parenthesis.
        span: Span,
    },
}

impl ParseError {
    /// Stable error code (P0001, P0002, ...)
    pub fn code(&self) -> &'static str {
        match self {
            ParseError::NoFunctionFound => "P0001",
            ParseError::UnclosedParameterList { .. } => "P0002",
        }
    }

    /// Primary source location, when the error has one.
    pub fn span(&self) -> Option<Span> {
        match self {
            ParseError::NoFunctionFound => None,
            ParseError::UnclosedParameterList { span, .. } => Some(*span),
        }
    }

    /// Follow-up hint shown under the diagnostic.
    pub fn help(&self) -> &'static str {
        match self {
            ParseError::NoFunctionFound => {
                "select a signature such as `void foo(int a, [int b = 1]) {}`"
            }
            ParseError::UnclosedParameterList { .. } => {
                "include the closing `)` of the parameter list in the selection"
            }
        }
    }
}
