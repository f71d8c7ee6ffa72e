//! Semantic type tags and alignment for classified cells.

/// Text alignment within a column.
///
/// Numeric type codes right-align by default; everything else
/// left-aligns. Center alignment is used for rendered header cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Align {
    /// Left-align text (pad on the right).
    #[default]
    Left,
    /// Right-align text (pad on the left).
    Right,
    /// Center text (pad on both sides).
    Center,
}

/// Semantic type tag assigned to a classified cell.
///
/// This is a closed set; every cell carries exactly one of these, and
/// column resolution works by folding [`TypeCode::unify`] over the
/// non-null cells of a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TypeCode {
    /// True null (a missing value).
    None,
    Bool,
    Integer,
    RealNumber,
    /// Positive or negative infinity.
    Infinity,
    /// Not-a-number.
    Nan,
    DateTime,
    /// A string that parses as an IPv4 or IPv6 address.
    IpAddress,
    List,
    Dictionary,
    /// An empty string, distinguished from a true null.
    NullString,
    /// Generic string, the fallback that always succeeds.
    String,
}

impl TypeCode {
    /// Whether the code is one of the number-like tags.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            TypeCode::Integer | TypeCode::RealNumber | TypeCode::Infinity | TypeCode::Nan
        )
    }

    /// Whether the code carries no usable data for type resolution.
    pub fn is_null(self) -> bool {
        matches!(self, TypeCode::None | TypeCode::NullString)
    }

    /// Default alignment for values of this type.
    pub fn align(self) -> Align {
        if self.is_numeric() {
            Align::Right
        } else {
            Align::Left
        }
    }

    /// Most specific common supertype of two codes.
    ///
    /// The lattice is deliberately small: null codes act as identities,
    /// equal codes unify to themselves, any two number-like codes unify
    /// to `RealNumber` (two integers stay `Integer`), and every other
    /// combination collapses to `String`.
    pub fn unify(self, other: TypeCode) -> TypeCode {
        match (self, other) {
            (a, b) if a == b => a,
            (TypeCode::None | TypeCode::NullString, b) => b,
            (a, TypeCode::None | TypeCode::NullString) => a,
            (a, b) if a.is_numeric() && b.is_numeric() => TypeCode::RealNumber,
            _ => TypeCode::String,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_codes_right_align() {
        assert_eq!(TypeCode::Integer.align(), Align::Right);
        assert_eq!(TypeCode::RealNumber.align(), Align::Right);
        assert_eq!(TypeCode::Nan.align(), Align::Right);
        assert_eq!(TypeCode::Infinity.align(), Align::Right);
        assert_eq!(TypeCode::String.align(), Align::Left);
        assert_eq!(TypeCode::Bool.align(), Align::Left);
    }

    #[test]
    fn test_unify_equal() {
        assert_eq!(TypeCode::Bool.unify(TypeCode::Bool), TypeCode::Bool);
        assert_eq!(TypeCode::DateTime.unify(TypeCode::DateTime), TypeCode::DateTime);
    }

    #[test]
    fn test_unify_null_is_identity() {
        assert_eq!(TypeCode::None.unify(TypeCode::Integer), TypeCode::Integer);
        assert_eq!(TypeCode::Integer.unify(TypeCode::NullString), TypeCode::Integer);
    }

    #[test]
    fn test_unify_numeric_widening() {
        assert_eq!(
            TypeCode::Integer.unify(TypeCode::RealNumber),
            TypeCode::RealNumber
        );
        assert_eq!(TypeCode::Integer.unify(TypeCode::Nan), TypeCode::RealNumber);
        assert_eq!(
            TypeCode::Infinity.unify(TypeCode::RealNumber),
            TypeCode::RealNumber
        );
        assert_eq!(TypeCode::Integer.unify(TypeCode::Integer), TypeCode::Integer);
    }

    #[test]
    fn test_unify_mixed_collapses_to_string() {
        assert_eq!(TypeCode::Integer.unify(TypeCode::String), TypeCode::String);
        assert_eq!(TypeCode::Bool.unify(TypeCode::Integer), TypeCode::String);
        assert_eq!(TypeCode::DateTime.unify(TypeCode::List), TypeCode::String);
    }
}
