use alloc::vec::Vec;

use crate::{IndexPath, IndexPathHeightCache};

/// A structural edit performed on the hosted list.
///
/// This is the notification interface between the widget layer and the cache: the caller
/// builds one `ListEdit` per edit it applies to the list and feeds it to
/// [`IndexPathHeightCache::apply`], in the same order the edits are declared. Keeping the
/// edits as plain data makes the cache testable without a real list widget, and (with
/// `feature = "serde"`) lets edit streams be recorded and replayed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ListEdit {
    InsertSection(usize),
    DeleteSection(usize),
    ReloadSection(usize),
    ExchangeSections(usize, usize),
    /// Row insertion targets in post-edit coordinates.
    InsertRows(Vec<IndexPath>),
    /// Row deletion targets in pre-edit coordinates.
    DeleteRows(Vec<IndexPath>),
    ReloadRows(Vec<IndexPath>),
    MoveRow { from: IndexPath, to: IndexPath },
    /// The hosted list reloaded everything; all cached heights are stale.
    ReloadData,
}

impl IndexPathHeightCache {
    /// Applies one structural edit, dispatching to the matching operation.
    pub fn apply(&mut self, edit: &ListEdit) {
        match edit {
            ListEdit::InsertSection(section) => self.insert_section(*section),
            ListEdit::DeleteSection(section) => self.delete_section(*section),
            ListEdit::ReloadSection(section) => self.reload_section(*section),
            ListEdit::ExchangeSections(a, b) => self.exchange_sections(*a, *b),
            ListEdit::InsertRows(paths) => self.insert_rows(paths.iter().copied()),
            ListEdit::DeleteRows(paths) => self.delete_rows(paths.iter().copied()),
            ListEdit::ReloadRows(paths) => self.reload_rows(paths.iter().copied()),
            ListEdit::MoveRow { from, to } => self.move_row(*from, *to),
            ListEdit::ReloadData => self.clear_all(),
        }
    }
}
