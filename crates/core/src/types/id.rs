//! Newtype IDs for type-safe entity references.
//!
//! Medusa identifiers are opaque prefixed strings (`prod_...`, `pcat_...`,
//! `sc_...`). Use the `define_id!` macro to create type-safe wrappers that
//! prevent accidentally mixing ids from different entity types.

/// Macro to define a type-safe ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - Conversion methods: `new()`, `as_str()`
/// - `From<String>`, `From<&str>`, and `Display` implementations
///
/// # Example
///
/// ```rust
/// # use medusa_seed_core::define_id;
/// define_id!(WarehouseId);
/// define_id!(SupplierId);
///
/// let warehouse = WarehouseId::new("wh_01");
/// let supplier = SupplierId::new("sup_01");
///
/// // These are different types, so this won't compile:
/// // let _: WarehouseId = supplier;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
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
            /// Create a new ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
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

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
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
define_id!(ProductId);
define_id!(CategoryId);
define_id!(SalesChannelId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display_roundtrip() {
        let id = ProductId::new("prod_01HZX");
        assert_eq!(id.as_str(), "prod_01HZX");
        assert_eq!(id.to_string(), "prod_01HZX");
    }

    #[test]
    fn test_id_serde_transparent() {
        let id = CategoryId::new("pcat_shoes");
        let json = serde_json::to_string(&id).expect("serialize id");
        assert_eq!(json, "\"pcat_shoes\"");

        let back: CategoryId = serde_json::from_str(&json).expect("deserialize id");
        assert_eq!(back, id);
    }

    #[test]
    fn test_id_from_string() {
        let id: SalesChannelId = String::from("sc_default").into();
        assert_eq!(id.as_str(), "sc_default");
    }
}
