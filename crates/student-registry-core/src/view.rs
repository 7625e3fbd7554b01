//! Search view: the filtered, renumbered rows shown to the user.
//!
//! Recomputed from scratch on every call. Collections are small and the
//! view holds nothing but borrows into the collection.

use crate::types::Record;

/// One visible row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRow<'a> {
    /// 1-based index among matched rows only.
    pub display_index: usize,
    /// Position of the record in the underlying collection.
    pub position: usize,
    pub record: &'a Record,
}

/// The rows matching a search term, in collection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisibleRows<'a> {
    rows: Vec<VisibleRow<'a>>,
}

impl<'a> VisibleRows<'a> {
    /// Number of matched rows.
    pub fn visible_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether more rows are visible than `threshold`.
    pub fn exceeds(&self, threshold: usize) -> bool {
        self.visible_count() > threshold
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VisibleRow<'a>> {
        self.rows.iter()
    }

    pub fn as_slice(&self) -> &[VisibleRow<'a>] {
        &self.rows
    }
}

impl<'a> IntoIterator for VisibleRows<'a> {
    type Item = VisibleRow<'a>;
    type IntoIter = std::vec::IntoIter<VisibleRow<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'r, 'a> IntoIterator for &'r VisibleRows<'a> {
    type Item = &'r VisibleRow<'a>;
    type IntoIter = std::slice::Iter<'r, VisibleRow<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Derive the visible rows for `search_term`.
///
/// A record matches when its name or student ID contains the term,
/// ignoring case. A blank term matches everything.
pub fn visible_rows<'a>(collection: &'a [Record], search_term: &str) -> VisibleRows<'a> {
    let query = search_term.trim().to_lowercase();

    let rows = collection
        .iter()
        .enumerate()
        .filter(|(_, record)| query.is_empty() || matches(record, &query))
        .enumerate()
        .map(|(matched, (position, record))| VisibleRow {
            display_index: matched + 1,
            position,
            record,
        })
        .collect();

    VisibleRows { rows }
}

fn matches(record: &Record, query: &str) -> bool {
    record.name.to_lowercase().contains(query) || record.student_id.to_lowercase().contains(query)
}
