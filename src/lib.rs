/*
 * ==========================================================================
 * PARAMSHIFT - Flip Dart parameter lists
 * ==========================================================================
 *
 * Converts function-signature text between positional parameters,
 * positional parameters with a trailing `[...]` optional block, and named
 * `{...}` parameters.
 *
 *   raw text → parse_function → FunctionDefinition
 *   FunctionDefinition.params → to_positional_params / to_named_params
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

pub mod ast;
pub mod converter;
pub mod diagnostics;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod span;
pub mod text;

pub use ast::{FunctionDefinition, FunctionParam, Notation};
pub use converter::{convert_signature, render_params, to_named_params, to_positional_params};
pub use error::ParseError;
pub use parser::parse_function;
