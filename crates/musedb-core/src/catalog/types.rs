//! Semantic type tags for catalog fields.

use rkyv::{Archive, Deserialize as RkyvDeserialize, Serialize as RkyvSerialize};
use serde::{Deserialize, Serialize};

/// Semantic type tag carried by a field descriptor.
///
/// Tags describe what the ORM layer should expect in the storage column;
/// they are not a full type system (no precision/scale parameters).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Archive,
    RkyvSerialize,
    RkyvDeserialize,
    Serialize,
    Deserialize,
)]
pub enum FieldKind {
    /// Variable-length UTF-8 text, bounded by the field's `length`.
    Text,
    /// 32-bit signed integer.
    Integer,
    /// 16-bit signed integer.
    ShortInt,
    /// 8-bit signed integer.
    Byte,
    /// 64-bit signed integer (also the primary-key type).
    Long,
    /// 64-bit floating point.
    Double,
    /// Fixed-precision decimal (coordinates, monetary values).
    Decimal,
    /// Boolean flag.
    Boolean,
    /// Calendar date without time of day.
    Date,
    /// Date and time of day.
    Timestamp,
    /// Unbounded text or binary payload.
    Blob,
}

impl FieldKind {
    /// Check if this kind is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            FieldKind::Integer
                | FieldKind::ShortInt
                | FieldKind::Byte
                | FieldKind::Long
                | FieldKind::Double
                | FieldKind::Decimal
        )
    }

    /// Check if this kind carries a calendar component.
    pub fn is_temporal(&self) -> bool {
        matches!(self, FieldKind::Date | FieldKind::Timestamp)
    }

    /// Check if this kind is length-bounded text.
    pub fn is_text(&self) -> bool {
        matches!(self, FieldKind::Text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_predicates() {
        assert!(FieldKind::Integer.is_numeric());
        assert!(FieldKind::Decimal.is_numeric());
        assert!(!FieldKind::Text.is_numeric());

        assert!(FieldKind::Date.is_temporal());
        assert!(FieldKind::Timestamp.is_temporal());
        assert!(!FieldKind::Boolean.is_temporal());

        assert!(FieldKind::Text.is_text());
        assert!(!FieldKind::Blob.is_text());
    }
}
