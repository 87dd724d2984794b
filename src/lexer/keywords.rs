/*
 * ==========================================================================
 * CLARITY - Typed Expression Language Parser
 * ==========================================================================
 *
 * Author:   Sam Wilcox
 *
 * License:
 * This file is part of the Clarity parser project.
 *
 * Clarity is dual-licensed under the terms of:
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

use crate::ast::TypeTag;

/// The statement keyword introducing a return.
pub const RETURN: &str = "return";

/// Determines whether a word is **reserved** and therefore can never be an
/// identifier.
///
/// Reserved words are:
/// - every type keyword (`int`, `int32`, `dict`, ...)
/// - `return`
/// - the keyword literals `true`, `false` and `null`
///
/// # Clarity Examples
/// ```text
/// int32     -> reserved (type)
/// return    -> reserved
/// returns   -> identifier
/// myVar     -> identifier
/// ```
pub fn is_reserved(word: &str) -> bool {
    matches!(word, "return" | "true" | "false" | "null") || TypeTag::from_keyword(word).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_keywords_are_reserved() {
        for tag in TypeTag::ALL {
            assert!(is_reserved(tag.keyword()));
        }
    }

    #[test]
    fn literal_keywords_are_reserved() {
        assert!(is_reserved(RETURN));
        assert!(is_reserved("true"));
        assert!(is_reserved("null"));
    }

    #[test]
    fn near_misses_are_not_reserved() {
        assert!(!is_reserved("returns"));
        assert!(!is_reserved("int128"));
        assert!(!is_reserved("True"));
    }
}
