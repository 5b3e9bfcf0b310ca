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

/// Determines whether a word followed by `(` is a **control-flow keyword**
/// rather than a function name.
///
/// The scanner uses this to prefer `foo` in selections such as
/// `if (ready) foo(a) {}`. A keyword is still used as the name when no
/// other identifier is followed by `(`.
///
/// ```text
/// if      -> keyword
/// switch  -> keyword
/// foo     -> identifier
/// ```
pub fn is_keyword(word: &str) -> bool {
    matches!(
        word,
        "if" |
        "for" |
        "while" |
        "switch" |
        "catch" |
        "assert" |
        "return" |
        "await" |
        "throw"
    )
}
