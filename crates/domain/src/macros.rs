//! Macro for implementing string conversions on wire enums
//!
//! Analysis and recommendation payloads use lowercase string tags
//! (`"warm"`, `"oval"`, `"mesomorph"`...). This macro gives those enums a
//! single source of truth for `as_str`, `Display` and case-insensitive
//! `FromStr`, so query strings and request bodies agree with serde.
//!
//! # Example
//!
//! ```rust
//! use lookcircuit_domain::impl_wire_enum_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Fit {
//!     Slim,
//!     Regular,
//! }
//!
//! impl_wire_enum_conversions!(Fit {
//!     Slim => "slim",
//!     Regular => "regular",
//! });
//!
//! assert_eq!(Fit::Slim.as_str(), "slim");
//! assert_eq!("REGULAR".parse::<Fit>().unwrap(), Fit::Regular);
//! ```

/// Implements `as_str`, Display and FromStr for wire enums
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their wire tags
/// * `_ => $other` - Optional `$other(String)` variant that carries any
///   unlisted tag verbatim. Open enums also get `From<String>` and
///   `From<Self> for String` for `#[serde(from, into)]`, and parsing never fails.
#[macro_export]
macro_rules! impl_wire_enum_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr,)+ _ => $other:ident $(,)? }) => {
        impl $enum_name {
            /// Wire tag for this variant
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $str,)+
                    Self::$other(tag) => tag.as_str(),
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl From<String> for $enum_name {
            fn from(tag: String) -> Self {
                match tag.to_lowercase().as_str() {
                    $($str => Self::$variant,)+
                    _ => Self::$other(tag),
                }
            }
        }

        impl From<&str> for $enum_name {
            fn from(tag: &str) -> Self {
                Self::from(tag.to_string())
            }
        }

        impl From<$enum_name> for String {
            fn from(value: $enum_name) -> Self {
                match value {
                    $enum_name::$other(tag) => tag,
                    known => known.as_str().to_string(),
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::from(s))
            }
        }
    };
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Wire tag for this variant
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
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
                match s.to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
