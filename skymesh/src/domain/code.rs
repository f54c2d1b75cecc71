//! Shared plumbing for 3-letter uppercase code newtypes.

/// Validate a 3-letter uppercase ASCII code, returning its bytes or the
/// reason it was rejected.
pub(crate) fn parse_alpha3(s: &str) -> Result<[u8; 3], &'static str> {
    let bytes = s.as_bytes();

    let Ok(code) = <[u8; 3]>::try_from(bytes) else {
        return Err("must be exactly 3 characters");
    };

    if !code.iter().all(u8::is_ascii_uppercase) {
        return Err("must be uppercase ASCII letters A-Z");
    }

    Ok(code)
}

/// View validated code bytes as a string slice.
pub(crate) fn alpha3_str(code: &[u8; 3]) -> &str {
    // Only ASCII letters are ever stored
    std::str::from_utf8(code).unwrap_or_default()
}

/// Implements `parse`, `as_str`, `Debug`, `Display` and the `String`
/// conversions serde uses for a `struct $name([u8; 3])` whose error type
/// is `struct $error { reason: &'static str }`.
macro_rules! alpha3_code {
    ($name:ident, $error:ident) => {
        impl $name {
            /// Parse a code from a string.
            ///
            /// The input must be exactly 3 uppercase ASCII letters (A-Z).
            pub fn parse(s: &str) -> Result<Self, $error> {
                $crate::domain::code::parse_alpha3(s)
                    .map($name)
                    .map_err(|reason| $error { reason })
            }

            /// Returns the code as a string slice.
            pub fn as_str(&self) -> &str {
                $crate::domain::code::alpha3_str(&self.0)
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::write!(f, "{}({})", ::std::stringify!($name), self.as_str())
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::convert::TryFrom<String> for $name {
            type Error = $error;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                $name::parse(&value)
            }
        }

        impl ::std::convert::From<$name> for String {
            fn from(code: $name) -> Self {
                code.as_str().to_string()
            }
        }
    };
}

pub(crate) use alpha3_code;
