//! Two-slot comparison selection.
//!
//! Slots fill in order. Once both are full, a new pick replaces the second
//! slot and the first stays put, so the first pick acts as the anchor of the
//! comparison until the user clears it.

use crate::domain::model::Title;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ComparisonSlots {
    #[default]
    Empty,
    First(Title),
    Both(Title, Title),
}

impl ComparisonSlots {
    pub fn select(self, item: Title) -> ComparisonSlots {
        match self {
            ComparisonSlots::Empty => ComparisonSlots::First(item),
            ComparisonSlots::First(first) => ComparisonSlots::Both(first, item),
            ComparisonSlots::Both(first, _) => ComparisonSlots::Both(first, item),
        }
    }

    pub fn clear(self) -> ComparisonSlots {
        ComparisonSlots::Empty
    }

    pub fn first(&self) -> Option<&Title> {
        match self {
            ComparisonSlots::Empty => None,
            ComparisonSlots::First(a) | ComparisonSlots::Both(a, _) => Some(a),
        }
    }

    pub fn second(&self) -> Option<&Title> {
        match self {
            ComparisonSlots::Both(_, b) => Some(b),
            _ => None,
        }
    }

    /// Slot contents by index, `None` for an empty slot.
    pub fn as_array(&self) -> [Option<&Title>; 2] {
        [self.first(), self.second()]
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ComparisonSlots::Empty)
    }

    pub fn is_full(&self) -> bool {
        matches!(self, ComparisonSlots::Both(..))
    }

    pub fn pair(&self) -> Option<(&Title, &Title)> {
        match self {
            ComparisonSlots::Both(a, b) => Some((a, b)),
            _ => None,
        }
    }
}

/// Result of feeding one pick to a [`ComparisonSelector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOutcome {
    /// Index of the slot the pick landed in.
    pub slot: usize,
    /// True only on the transition into "both full". Replacing the second
    /// slot of a comparison that was already full does not fire it again.
    pub completed: bool,
}

/// Owns a [`ComparisonSlots`] and reports completion transitions so the
/// front end can bring the comparison into view exactly once.
#[derive(Debug, Clone, Default)]
pub struct ComparisonSelector {
    slots: ComparisonSlots,
}

impl ComparisonSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slots(&self) -> &ComparisonSlots {
        &self.slots
    }

    pub fn select(&mut self, item: Title) -> SelectOutcome {
        let was_full = self.slots.is_full();
        let slot = if self.slots.is_empty() { 0 } else { 1 };

        tracing::debug!("Placing '{}' in slot {}", item.title, slot);
        self.slots = std::mem::take(&mut self.slots).select(item);

        SelectOutcome {
            slot,
            completed: !was_full && self.slots.is_full(),
        }
    }

    pub fn clear(&mut self) {
        self.slots = std::mem::take(&mut self.slots).clear();
    }
}
