use egui::util::undoer::Undoer;
use tilelink_core::LinkSet;

/// Undo/redo over the link relation only; table, mapping, and view
/// state are not part of the history.
pub struct UndoRedoManager {
    undoer: Undoer<LinkSet>,
}

impl UndoRedoManager {
    pub fn new() -> Self {
        Self {
            undoer: Undoer::default(),
        }
    }

    /// Records an immediate undo point for a discrete action (board
    /// load, manual link edit, auto relink).
    pub fn add_undo(&mut self, links: &LinkSet) {
        self.undoer.add_undo(links);
    }

    pub fn undo(&mut self, links: &LinkSet) -> Option<LinkSet> {
        self.undoer.undo(links).cloned()
    }

    pub fn redo(&mut self, links: &LinkSet) -> Option<LinkSet> {
        self.undoer.redo(links).cloned()
    }

    pub fn has_undo(&self, links: &LinkSet) -> bool {
        self.undoer.has_undo(links)
    }

    pub fn has_redo(&self, links: &LinkSet) -> bool {
        self.undoer.has_redo(links)
    }

    pub fn clear_history(&mut self) {
        self.undoer = Undoer::default();
    }
}

impl Default for UndoRedoManager {
    fn default() -> Self {
        Self::new()
    }
}
