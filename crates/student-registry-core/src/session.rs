//! Edit session: whether the next submit appends or replaces.
//!
//! The session only tracks *which* record is targeted. The working draft of
//! field values belongs to the input layer; [`Session::begin_edit`] hands
//! back a copy of the targeted record for it to fill its inputs with.

use crate::types::Record;

/// The edit-mode state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Session {
    /// No target; the next successful submit appends a new record.
    #[default]
    Composing,
    /// The next successful submit replaces the record at this position.
    Editing(usize),
}

impl Session {
    /// Create a session in the initial `Composing` state.
    pub fn new() -> Self {
        Self::Composing
    }

    /// Target the record at `position` and return its fields as the draft.
    ///
    /// Allowed from any state; a second `begin_edit` simply retargets.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of range for `collection`. That is a
    /// desynchronized caller, not bad input.
    pub fn begin_edit(&mut self, position: usize, collection: &[Record]) -> Record {
        let Some(record) = collection.get(position) else {
            panic!(
                "begin_edit position {position} out of range for collection of {}",
                collection.len()
            );
        };
        *self = Session::Editing(position);
        record.clone()
    }

    /// Return to `Composing`. Used for explicit resets and after a
    /// successful submit.
    pub fn reset(&mut self) {
        *self = Session::Composing;
    }

    /// Follow a removal at `position` in the collection.
    ///
    /// Removing the edited record drops back to `Composing`. Removing a
    /// record below the target shifts the target down so it still names the
    /// same record.
    pub fn record_removed(&mut self, position: usize) {
        if let Session::Editing(target) = *self {
            if target == position {
                *self = Session::Composing;
            } else if target > position {
                *self = Session::Editing(target - 1);
            }
        }
    }

    /// The position being edited, if any.
    pub fn edit_position(&self) -> Option<usize> {
        match self {
            Session::Composing => None,
            Session::Editing(position) => Some(*position),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, Session::Editing(_))
    }
}
