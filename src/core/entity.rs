//! Card instance identification.
//!
//! Every card instance created for a game gets a unique `InstanceId`.
//! Definition identifiers (`CardId`) name the kind of card; instance ids name
//! one specific copy and are the only way to locate it inside a zone.
//!
//! ## Usage
//!
//! ```
//! use pixel_forge::core::{InstanceId, InstanceIdAllocator};
//!
//! let mut ids = InstanceIdAllocator::new();
//! let first = ids.alloc();
//! let second = ids.alloc();
//!
//! assert_ne!(first, second);
//! assert_eq!(first, InstanceId(1));
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card instance within a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl InstanceId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for InstanceId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instance({})", self.0)
    }
}

/// Monotonic allocator for instance ids.
///
/// Ids start at 1 and are never reused within one allocator. A game owns a
/// single allocator, so ids are unique across both sides' decks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceIdAllocator {
    next: u32,
}

impl Default for InstanceIdAllocator {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl InstanceIdAllocator {
    /// Create an allocator starting at id 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id.
    pub fn alloc(&mut self) -> InstanceId {
        let id = InstanceId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far.
    #[must_use]
    pub fn allocated(&self) -> u32 {
        self.next - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_is_monotonic() {
        let mut ids = InstanceIdAllocator::new();

        let a = ids.alloc();
        let b = ids.alloc();
        let c = ids.alloc();

        assert!(a < b && b < c);
        assert_eq!(ids.allocated(), 3);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", InstanceId(42)), "Instance(42)");
    }

    #[test]
    fn test_serialization() {
        let id = InstanceId(123);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: InstanceId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
