//! Newtype IDs for type-safe identifiers.
//!
//! The catalog API numbers its products, so identifiers wrap a `u64`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate numeric newtype ID structs.
macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Create a new ID from its numeric value.
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            /// Get the numeric value.
            pub const fn get(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }
    };
}

define_id!(
    /// Identifier of a catalog product, stable per catalog entry.
    ProductId
);
define_id!(
    /// Handle returned by `CartStore::subscribe`.
    SubscriptionId
);
