//! Immediate singletons.

use std::fmt;

/// Payload-free singleton values.
///
/// Each tag is its own unique instance: equality is tag equality, and the
/// whole value fits in one byte.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Immediate {
    /// The empty list.
    Null,
    True,
    False,
    Eof,
    Undefined,
    Unspecified,
}

scm_ir::static_assert_size!(Immediate, 1);

impl Immediate {
    /// All six tags.
    pub const ALL: [Immediate; 6] = [
        Immediate::Null,
        Immediate::True,
        Immediate::False,
        Immediate::Eof,
        Immediate::Undefined,
        Immediate::Unspecified,
    ];

    #[inline]
    pub const fn boolean(b: bool) -> Self {
        if b {
            Immediate::True
        } else {
            Immediate::False
        }
    }

    /// Name of the value's type as seen by Scheme code.
    pub const fn type_name(self) -> &'static str {
        match self {
            Immediate::Null => "null",
            Immediate::True | Immediate::False => "boolean",
            Immediate::Eof => "eof-object",
            Immediate::Undefined => "undefined",
            Immediate::Unspecified => "unspecified",
        }
    }
}

impl fmt::Display for Immediate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Immediate::Null => "()",
            Immediate::True => "#t",
            Immediate::False => "#f",
            Immediate::Eof => "#<eof>",
            Immediate::Undefined => "#<undefined>",
            Immediate::Unspecified => "#<unspecified>",
        })
    }
}
