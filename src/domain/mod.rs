//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields that make up the
//! address book records: names, IDs, email addresses, phone numbers,
//! addresses, unit prices and tags. These value objects provide validation
//! at construction time and prevent invalid data from being represented in
//! the system.

/// Shared plumbing for string-backed value objects: accessors, `Display`,
/// and serde support that re-validates on deserialization.
macro_rules! string_value_object {
    ($ty:ident) => {
        impl $ty {
            /// Get the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl ::std::str::FromStr for $ty {
            type Err = $crate::domain::ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $ty::new(s)
            }
        }

        impl ::serde::Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                self.0.serialize(serializer)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                $ty::new(s).map_err(::serde::de::Error::custom)
            }
        }
    };
}

pub mod address;
pub mod email;
pub mod errors;
pub mod id;
pub mod name;
pub mod phone;
pub mod tag;
pub mod unit_price;

pub use address::Address;
pub use email::Email;
pub use errors::ValidationError;
pub use id::Id;
pub use name::Name;
pub use phone::PhoneNumber;
pub use tag::Tag;
pub use unit_price::UnitPrice;
