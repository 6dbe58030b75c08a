//! Restaurant table entity

/// A physical table in the dining room.
///
/// Created once at setup and never mutated; identity is `id`. Tables are
/// small value records, so they are loaded and copied freely rather than
/// shared through a registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Unique table ID (assigned by the store)
    pub id: i32,
    /// Table number shown to staff and guests
    pub number: i32,
    /// Maximum party size
    pub capacity: i32,
    /// Where the table sits (e.g. "Window", "Bar")
    pub location: String,
}

impl Table {
    pub fn new(id: i32, number: i32, capacity: i32, location: impl Into<String>) -> Self {
        Self {
            id,
            number,
            capacity,
            location: location.into(),
        }
    }

    pub fn fits(&self, party_size: i32) -> bool {
        party_size <= self.capacity
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Table #{} ({} seats, {})",
            self.number, self.capacity, self.location
        )
    }
}
