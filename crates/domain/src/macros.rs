//! Macro for implementing wire conversions on marketplace enums
//!
//! The backend exchanges enum values as SCREAMING_SNAKE_CASE strings and the
//! front-end renders each one with a Portuguese label. This macro generates
//! both sides from a single table.
//!
//! # Example
//!
//! ```rust
//! use tudofresco_domain::impl_wire_enum;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Size {
//!     Small,
//!     Large,
//! }
//!
//! impl_wire_enum!(Size {
//!     Small => "SMALL", "Pequeno",
//!     Large => "LARGE", "Grande",
//! });
//!
//! assert_eq!(Size::Small.to_string(), "SMALL");
//! assert_eq!("large".parse::<Size>().unwrap(), Size::Large);
//! assert_eq!(Size::Large.label(), "Grande");
//! ```

/// Implements Display, FromStr, `label()` and `ALL` for a wire enum
///
/// This macro generates:
/// - Display trait: the wire value
/// - FromStr trait: case-insensitive parsing of the wire value
/// - `label()`: the Portuguese display label
/// - `ALL`: every variant in declaration order
#[macro_export]
macro_rules! impl_wire_enum {
    ($enum_name:ident { $($variant:ident => $wire:expr, $label:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Every variant in declaration order
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Wire value sent to and received from the backend
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }

            /// Human-readable label shown to users
            pub const fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_ascii_uppercase().as_str() {
                    $($wire => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestStatus {
        Opened,
        Closed,
    }

    impl_wire_enum!(TestStatus {
        Opened => "OPENED", "Aberto",
        Closed => "CLOSED", "Fechado",
    });

    #[test]
    fn test_display_uses_wire_value() {
        assert_eq!(TestStatus::Opened.to_string(), "OPENED");
        assert_eq!(TestStatus::Closed.to_string(), "CLOSED");
    }

    #[test]
    fn test_fromstr_mixed_case() {
        assert_eq!(TestStatus::from_str("opened").unwrap(), TestStatus::Opened);
        assert_eq!(TestStatus::from_str("ClOsEd").unwrap(), TestStatus::Closed);
    }

    #[test]
    fn test_fromstr_invalid() {
        let result = TestStatus::from_str("pending");
        assert!(result.unwrap_err().contains("Invalid TestStatus: pending"));
    }

    #[test]
    fn test_labels_and_all() {
        assert_eq!(TestStatus::Opened.label(), "Aberto");
        assert_eq!(TestStatus::ALL, &[TestStatus::Opened, TestStatus::Closed]);
    }
}
