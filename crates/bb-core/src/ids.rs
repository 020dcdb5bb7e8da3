use core::fmt;
use core::num::NonZeroU32;

/// Identifier of a node within its circuit, or of a circuit on its board.
///
/// Stored shifted by one in a `NonZeroU32`, so `Option<NodeId>` costs
/// nothing extra. Valid indices are `0..u32::MAX`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(NonZeroU32);

impl Id {
    /// Largest index an id can carry.
    pub const MAX_INDEX: u32 = u32::MAX - 1;

    /// Id for the 0-based `index`.
    ///
    /// # Panics
    ///
    /// If `index` is `u32::MAX`.
    pub fn from_index(index: u32) -> Self {
        Self::try_from_index(index).expect("id index exceeds Id::MAX_INDEX")
    }

    /// Id for the 0-based `index`, or `None` past `MAX_INDEX`.
    pub fn try_from_index(index: u32) -> Option<Self> {
        index.checked_add(1).and_then(NonZeroU32::new).map(Self)
    }

    /// Position of this id in allocation order.
    pub fn index(self) -> u32 {
        self.0.get() - 1
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.index())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Id {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.index())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Id {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let index = u32::deserialize(deserializer)?;
        Id::try_from_index(index).ok_or_else(|| serde::de::Error::custom("id index out of range"))
    }
}

/// Node ids are local to a circuit, circuit ids local to a board.
pub type NodeId = Id;
pub type CircuitId = Id;

/// Monotonic allocator handing out fresh ids.
///
/// Ids are unique per allocator only; two circuits may both own a node `0`.
#[derive(Debug, Default, Clone)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id. Ids from one allocator sort in allocation order.
    ///
    /// # Panics
    ///
    /// Once all `Id::MAX_INDEX + 1` ids have been handed out.
    pub fn fresh(&mut self) -> Id {
        let id = Id::from_index(self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far.
    pub fn allocated(&self) -> u32 {
        self.next
    }
}
