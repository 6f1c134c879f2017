//! Newtype IDs for catalog records.
//!
//! Record ids are opaque strings. Generated ids follow the document-store
//! convention of 24 lowercase hex characters: a 4-byte seconds timestamp
//! followed by 8 bytes mixing sub-second time with a process-wide counter.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// An opaque record identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a new unique ID.
            pub fn generate() -> Self {
                Self(generate_id())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(CategoryId);
define_id!(CarouselImageId);
define_id!(ShopInfoId);

fn generate_id() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    let counter = COUNTER.fetch_add(1, Ordering::SeqCst);

    // Counter lives in the low bits so ids minted in the same instant differ.
    let tail = ((now.subsec_nanos() as u64) << 32) | (counter & 0xffff_ffff);
    format!("{:08x}{:016x}", now.as_secs() as u32, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("prod-123");
        assert_eq!(id.as_str(), "prod-123");
    }

    #[test]
    fn test_id_generation_is_unique_and_hex() {
        let id1 = ProductId::generate();
        let id2 = ProductId::generate();
        assert_ne!(id1, id2);
        assert_eq!(id1.as_str().len(), 24);
        assert!(id1.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = CategoryId::new("abc");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc\"");
    }

    #[test]
    fn test_id_display() {
        let id = ShopInfoId::new("shop-1");
        assert_eq!(format!("{}", id), "shop-1");
    }
}
