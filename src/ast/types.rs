/*
 * ==========================================================================
 * CLARITY - Typed Expression Language Parser
 * ==========================================================================
 *
 * File:     ast/types.rs
 * Purpose:  The closed set of type keywords usable in signatures.
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

use serde::{Deserialize, Serialize};

/// A primitive or composite type keyword.
///
/// Appears in function return lists and parameter declarations:
/// ```text
/// int32, float foo(int32 x, float y) { ... }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    Void,
    Boolean,
    Char,
    Byte,
    Int,
    Long,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float,
    Double,
    String,
    Tuple,
    Array,
    Dict,
    Set,
    Binary,
    Object,
}

impl TypeTag {
    /// Every tag, in keyword-table order.
    pub const ALL: [TypeTag; 23] = [
        TypeTag::Void,
        TypeTag::Boolean,
        TypeTag::Char,
        TypeTag::Byte,
        TypeTag::Int,
        TypeTag::Long,
        TypeTag::Int8,
        TypeTag::Int16,
        TypeTag::Int32,
        TypeTag::Int64,
        TypeTag::UInt8,
        TypeTag::UInt16,
        TypeTag::UInt32,
        TypeTag::UInt64,
        TypeTag::Float,
        TypeTag::Double,
        TypeTag::String,
        TypeTag::Tuple,
        TypeTag::Array,
        TypeTag::Dict,
        TypeTag::Set,
        TypeTag::Binary,
        TypeTag::Object,
    ];

    /// The source keyword for this tag.
    pub fn keyword(self) -> &'static str {
        match self {
            TypeTag::Void => "void",
            TypeTag::Boolean => "boolean",
            TypeTag::Char => "char",
            TypeTag::Byte => "byte",
            TypeTag::Int => "int",
            TypeTag::Long => "long",
            TypeTag::Int8 => "int8",
            TypeTag::Int16 => "int16",
            TypeTag::Int32 => "int32",
            TypeTag::Int64 => "int64",
            TypeTag::UInt8 => "uint8",
            TypeTag::UInt16 => "uint16",
            TypeTag::UInt32 => "uint32",
            TypeTag::UInt64 => "uint64",
            TypeTag::Float => "float",
            TypeTag::Double => "double",
            TypeTag::String => "string",
            TypeTag::Tuple => "tuple",
            TypeTag::Array => "array",
            TypeTag::Dict => "dict",
            TypeTag::Set => "set",
            TypeTag::Binary => "binary",
            TypeTag::Object => "object",
        }
    }

    /// Looks up a whole word. `int8` resolves to `Int8`, never to `Int`.
    pub fn from_keyword(word: &str) -> Option<TypeTag> {
        TypeTag::ALL.into_iter().find(|tag| tag.keyword() == word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_round_trip() {
        for tag in TypeTag::ALL {
            assert_eq!(TypeTag::from_keyword(tag.keyword()), Some(tag));
        }
    }

    #[test]
    fn unknown_keywords_are_rejected() {
        assert_eq!(TypeTag::from_keyword("integer"), None);
        assert_eq!(TypeTag::from_keyword("Int"), None);
        assert_eq!(TypeTag::from_keyword(""), None);
    }

    #[test]
    fn serializes_as_keyword() {
        let json = serde_json::to_string(&TypeTag::UInt16).unwrap();
        assert_eq!(json, "\"uint16\"");
    }
}
