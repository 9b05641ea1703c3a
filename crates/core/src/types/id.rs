//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. IDs are short
//! prefixed strings (`s1`, `p-<uuid>`, ...) so seeded fixtures can use
//! stable handles while runtime-created entities get collision-free ones.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - `new()` for fixed ids, `generate()` for fresh prefixed unique ids
/// - `as_str()`, `Display`, and `From<&str>`/`From<String>` conversions
///
/// # Example
///
/// ```rust
/// # use emberkicks_core::define_id;
/// define_id!(SellerId, "s");
/// define_id!(ProductId, "p");
///
/// let seller_id = SellerId::new("s1");
/// let product_id = ProductId::generate();
///
/// assert!(product_id.as_str().starts_with("p-"));
/// // These are different types, so this won't compile:
/// // let _: SellerId = product_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an ID from a known value (seed data, external input).
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a fresh unique ID with this entity's prefix.
            #[must_use]
            pub fn generate() -> Self {
                Self(format!(concat!($prefix, "-{}"), ::uuid::Uuid::new_v4()))
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(UserId, "u");
define_id!(SellerId, "s");
define_id!(ProductId, "p");

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_value() {
        let id = SellerId::new("s1");
        assert_eq!(id.as_str(), "s1");
        assert_eq!(id.to_string(), "s1");
    }

    #[test]
    fn test_generate_is_prefixed_and_unique() {
        let a = ProductId::generate();
        let b = ProductId::generate();
        assert!(a.as_str().starts_with("p-"));
        assert!(b.as_str().starts_with("p-"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_serde_transparent() {
        let id = ProductId::new("p7");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"p7\"");

        let parsed: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_from_conversions() {
        let id: UserId = "guest-42".into();
        assert_eq!(id.as_str(), "guest-42");
        let s: String = id.into();
        assert_eq!(s, "guest-42");
    }
}
