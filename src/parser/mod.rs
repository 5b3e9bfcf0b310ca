/*
 * ==========================================================================
 * PARAMSHIFT - Flip Dart parameter lists
 * ==========================================================================
 *
 * File:     parser/mod.rs
 * Purpose:  Root module for the signature parser.
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

/// Core parser orchestration:
/// - Exposes the `parse_function(raw)` entry point
/// - Dispatches on the classified shape
pub mod parser;

/// Shape classification:
/// - positional / positional-with-optional / named
pub mod shape;

/// Shared parser helpers:
/// - segment splitting
/// - type/name separation
/// - default values and the `required` keyword
pub mod helpers;

pub use parser::{parse_function, parse_params};
pub use shape::{classify, ParamShape};
