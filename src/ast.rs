/*
 * ==========================================================================
 * PARAMSHIFT - Flip Dart parameter lists
 * ==========================================================================
 *
 * File:     ast.rs
 * Purpose:  Root of the signature data model
 *
 * The model is deliberately flat: a function name and an ordered list of
 * parameters. Both records are values, built once by the parser (or a
 * test fixture) and never mutated afterwards.
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

pub mod function;
pub mod notation;
pub mod param;

pub use function::FunctionDefinition;
pub use notation::Notation;
pub use param::FunctionParam;
