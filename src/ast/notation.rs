/*
 * ==========================================================================
 * PARAMSHIFT - Flip Dart parameter lists
 * ==========================================================================
 *
 * File:     notation.rs
 * Purpose:  The two parameter-list notations a signature can be rendered in
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

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Target notation for rendering a parameter list.
///
/// ```text
/// Positional → int a, [b = 1]
/// Named      → {required int a, b = 1}
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    /// Declaration-order parameters, optional ones grouped in `[...]`.
    Positional,

    /// Keyword parameters in `{...}`, required ones prefixed with `required`.
    Named,
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notation::Positional => write!(f, "positional"),
            Notation::Named => write!(f, "named"),
        }
    }
}

impl FromStr for Notation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positional" => Ok(Notation::Positional),
            "named" => Ok(Notation::Named),
            other => Err(format!(
                "unknown notation `{other}` (expected `positional` or `named`)"
            )),
        }
    }
}
