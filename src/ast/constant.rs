/*
 * ==========================================================================
 * CLARITY - Typed Expression Language Parser
 * ==========================================================================
 *
 * File:     ast/constant.rs
 * Purpose:  Literal constants and their classification.
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

use crate::ast::types::TypeTag;
use serde::{Deserialize, Serialize};

/// Which literal form a constant was written in.
///
/// The order the lexer tries these in lives in
/// `lexer::constants::CONSTANT_PRIORITY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstantKind {
    /// `0x1A`
    Hex,
    /// `1.0f`, `1.f`
    Float,
    /// `1.0`
    Double,
    /// `1l`
    Long,
    /// `1i8`
    Int8,
    /// `1i16`
    Int16,
    /// `1i32`
    Int32,
    /// `1i64`
    Int64,
    /// `1u8`
    #[serde(rename = "uint8")]
    UInt8,
    /// `1u16`
    #[serde(rename = "uint16")]
    UInt16,
    /// `1u32`
    #[serde(rename = "uint32")]
    UInt32,
    /// `1u64`
    #[serde(rename = "uint64")]
    UInt64,
    /// `1`
    Integer,
    /// `'a'`
    Char,
    /// `true`, `false`
    Boolean,
    /// `null`
    Null,
    /// `""`
    EmptyString,
    /// `"text"`
    String,
    /// `{}`
    EmptyDict,
    /// `[]`
    EmptyArray,
    /// `()`
    EmptyTuple,
    /// `[1, 2, 3]`
    Array,
    /// `(1, 2, 3.0)`
    Tuple,
    /// `{"a": 1}`
    Dict,
}

impl ConstantKind {
    /// The type a literal of this kind denotes. `null` has no type of its own.
    pub fn natural_type(self) -> Option<TypeTag> {
        let tag = match self {
            ConstantKind::Hex | ConstantKind::Integer => TypeTag::Int,
            ConstantKind::Float => TypeTag::Float,
            ConstantKind::Double => TypeTag::Double,
            ConstantKind::Long => TypeTag::Long,
            ConstantKind::Int8 => TypeTag::Int8,
            ConstantKind::Int16 => TypeTag::Int16,
            ConstantKind::Int32 => TypeTag::Int32,
            ConstantKind::Int64 => TypeTag::Int64,
            ConstantKind::UInt8 => TypeTag::UInt8,
            ConstantKind::UInt16 => TypeTag::UInt16,
            ConstantKind::UInt32 => TypeTag::UInt32,
            ConstantKind::UInt64 => TypeTag::UInt64,
            ConstantKind::Char => TypeTag::Char,
            ConstantKind::Boolean => TypeTag::Boolean,
            ConstantKind::EmptyString | ConstantKind::String => TypeTag::String,
            ConstantKind::EmptyDict | ConstantKind::Dict => TypeTag::Dict,
            ConstantKind::EmptyArray | ConstantKind::Array => TypeTag::Array,
            ConstantKind::EmptyTuple | ConstantKind::Tuple => TypeTag::Tuple,
            ConstantKind::Null => return None,
        };
        Some(tag)
    }

    /// True for `""`, `{}`, `[]` and `()`.
    pub fn is_empty_literal(self) -> bool {
        matches!(
            self,
            ConstantKind::EmptyString
                | ConstantKind::EmptyDict
                | ConstantKind::EmptyArray
                | ConstantKind::EmptyTuple
        )
    }
}

/// A literal exactly as written in the source, plus its classification.
///
/// Composite literals (arrays, tuples, dicts) keep their raw text; their
/// elements are not parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constant {
    pub kind: ConstantKind,
    pub text: String,
}

impl Constant {
    pub fn new(kind: ConstantKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_types() {
        assert_eq!(ConstantKind::Hex.natural_type(), Some(TypeTag::Int));
        assert_eq!(ConstantKind::UInt32.natural_type(), Some(TypeTag::UInt32));
        assert_eq!(ConstantKind::EmptyDict.natural_type(), Some(TypeTag::Dict));
        assert_eq!(ConstantKind::Null.natural_type(), None);
    }

    #[test]
    fn serializes_kind_names() {
        let constant = Constant::new(ConstantKind::UInt8, "7u8");
        let json = serde_json::to_string(&constant).unwrap();
        assert_eq!(json, r#"{"kind":"uint8","text":"7u8"}"#);

        let json = serde_json::to_string(&ConstantKind::EmptyTuple).unwrap();
        assert_eq!(json, "\"empty_tuple\"");
    }
}
