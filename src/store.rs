//! The single owner of outline state.
//!
//! Every structural change flows through an action here: the action checks
//! the engine's guards, commits the engine's result together with an updated
//! selection, writes the document back to disk, and sets a status message.
//! Nothing else in the program mutates the outline or the selection.

use std::path::PathBuf;

use crate::i18n::{Messages, Msg};
use crate::io::{diagnostics, document_io};
use crate::model::{Document, Item};
use crate::ops::tree;
use crate::util::unicode::{next_grapheme_boundary, prev_grapheme_boundary};

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    List,
    Add,
    Edit,
}

pub struct Store {
    document: Document,
    path: PathBuf,
    messages: Messages,
    selected: usize,
    mode: Mode,
    /// Pending text while adding or editing
    input: String,
    /// Byte offset of the input cursor (always on a grapheme boundary)
    cursor: usize,
    /// Transient outcome of the last action
    status: Option<String>,
}

impl Store {
    pub fn new(document: Document, path: PathBuf, messages: Messages) -> Self {
        Store {
            document,
            path,
            messages,
            selected: 0,
            mode: Mode::List,
            input: String::new(),
            cursor: 0,
            status: None,
        }
    }

    // -- Read access for the render layer --

    pub fn title(&self) -> &str {
        &self.document.title
    }

    pub fn items(&self) -> &[Item] {
        &self.document.items
    }

    /// Index of the selected item; None when the outline is empty.
    pub fn selection(&self) -> Option<usize> {
        (!self.document.items.is_empty()).then_some(self.selected)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    // -- Selection --

    pub fn select_next(&mut self) {
        let len = self.document.items.len();
        if len == 0 {
            return;
        }
        self.selected = if self.selected + 1 < len {
            self.selected + 1
        } else {
            0
        };
    }

    pub fn select_previous(&mut self) {
        let len = self.document.items.len();
        if len == 0 {
            return;
        }
        self.selected = if self.selected > 0 {
            self.selected - 1
        } else {
            len - 1
        };
    }

    // -- Input buffer (add/edit modes) --

    pub fn start_add(&mut self) {
        self.mode = Mode::Add;
        self.input.clear();
        self.cursor = 0;
    }

    /// Enter edit mode seeded with the selected item's label. No-op when the
    /// outline is empty.
    pub fn start_edit(&mut self) {
        let Some(idx) = self.selection() else { return };
        self.input = self.document.items[idx].label.clone();
        self.cursor = self.input.len();
        self.mode = Mode::Edit;
    }

    pub fn cancel_input(&mut self) {
        self.mode = Mode::List;
        self.input.clear();
        self.cursor = 0;
    }

    pub fn input_insert(&mut self, text: &str) {
        self.input.insert_str(self.cursor, text);
        self.cursor += text.len();
    }

    pub fn input_backspace(&mut self) {
        if let Some(prev) = prev_grapheme_boundary(&self.input, self.cursor) {
            self.input.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    pub fn input_left(&mut self) {
        if let Some(prev) = prev_grapheme_boundary(&self.input, self.cursor) {
            self.cursor = prev;
        }
    }

    pub fn input_right(&mut self) {
        if let Some(next) = next_grapheme_boundary(&self.input, self.cursor) {
            self.cursor = next;
        }
    }

    pub fn input_home(&mut self) {
        self.cursor = 0;
    }

    pub fn input_end(&mut self) {
        self.cursor = self.input.len();
    }

    /// Commit the pending input: append a new top-level item (Add) or
    /// relabel the selected item in place (Edit). Blank input commits
    /// nothing; either way the store returns to list mode.
    pub fn commit_input(&mut self) {
        let label = self.input.trim().to_string();
        if !label.is_empty() {
            match self.mode {
                Mode::Add => {
                    self.document.items.push(Item::new(label.clone()));
                    self.status = Some(self.messages.format(Msg::Added, &[("task", &label)]));
                    self.persist();
                }
                Mode::Edit => {
                    if let Some(idx) = self.selection() {
                        self.document.items[idx].label = label.clone();
                        self.status =
                            Some(self.messages.format(Msg::Edited, &[("task", &label)]));
                        self.persist();
                    }
                }
                Mode::List => {}
            }
        }
        self.cancel_input();
    }

    // -- Structural actions --

    /// Toggle the selected item, forcing its subtree to match and rolling
    /// the new state up through its ancestors.
    pub fn toggle(&mut self) {
        let Some(idx) = self.selection() else { return };
        let items = &self.document.items;
        let completed = !items[idx].completed;
        self.document.items = tree::set_completed_with_sync(items, idx, completed);
        let label = self.document.items[idx].label.clone();
        self.status = Some(self.messages.format(Msg::Toggled, &[("task", &label)]));
        self.persist();
    }

    /// Delete the selected item and its entire subtree.
    pub fn delete(&mut self) {
        let Some(idx) = self.selection() else { return };
        let label = self.document.items[idx].label.clone();
        self.document.items = tree::delete_subtree(&self.document.items, idx);

        let len = self.document.items.len();
        if self.selected >= len && len > 0 {
            self.selected = len - 1;
        }

        self.status = Some(self.messages.format(Msg::Deleted, &[("task", &label)]));
        self.persist();
    }

    /// Move the selected item (and subtree) one level toward its parent.
    pub fn promote(&mut self) {
        let Some(idx) = self.selection() else { return };
        let items = &self.document.items;
        if !tree::can_promote(items, idx) {
            self.status = Some(self.messages.text(Msg::CannotPromote).to_string());
            return;
        }
        if let Some(level) = tree::promote_level(items, idx) {
            self.document.items = tree::adjust_level(items, idx, level);
            self.status = Some(self.messages.text(Msg::Promoted).to_string());
            self.persist();
        }
    }

    /// Nest the selected item (and subtree) one level deeper.
    pub fn demote(&mut self) {
        let Some(idx) = self.selection() else { return };
        let items = &self.document.items;
        if !tree::can_demote(items, idx) {
            self.status = Some(self.messages.text(Msg::CannotDemote).to_string());
            return;
        }
        if let Some(level) = tree::demote_level(items, idx) {
            self.document.items = tree::adjust_level(items, idx, level);
            self.status = Some(self.messages.text(Msg::Demoted).to_string());
            self.persist();
        }
    }

    /// Swap the selected block with its previous sibling block.
    pub fn move_task_up(&mut self) {
        let Some(idx) = self.selection() else { return };
        let items = &self.document.items;
        let Some(target) = tree::previous_sibling_index(items, idx) else {
            self.status = Some(self.messages.text(Msg::CannotMove).to_string());
            return;
        };
        if !tree::can_move_to(items, idx, target) {
            self.status = Some(self.messages.text(Msg::CannotMove).to_string());
            return;
        }
        self.document.items = tree::move_block(items, idx, target);
        self.selected = target;
        self.persist();
    }

    /// Swap the selected block with its next sibling block.
    pub fn move_task_down(&mut self) {
        let Some(idx) = self.selection() else { return };
        let items = &self.document.items;
        let Some(next) = tree::next_sibling_index(items, idx) else {
            self.status = Some(self.messages.text(Msg::CannotMove).to_string());
            return;
        };
        // Insertion point just past the successor block, in pre-move indices
        let dest = tree::subtree_range(items, next).end;
        if !tree::can_move_to(items, idx, dest) {
            self.status = Some(self.messages.text(Msg::CannotMove).to_string());
            return;
        }
        let block_len = tree::subtree_range(items, idx).end - idx;
        self.document.items = tree::move_block(items, idx, dest);
        self.selected = dest - block_len;
        self.persist();
    }

    // -- Persistence --

    /// Write the committed document to disk. A failure never unwinds the
    /// action that was just applied: the content is preserved in the
    /// recovery log and the failure surfaces as a status message.
    fn persist(&mut self) {
        if let Err(e) = document_io::save_document(&self.path, &self.document) {
            diagnostics::log_save_failure(
                &self.path,
                diagnostics::FailureEntry {
                    timestamp: chrono::Utc::now(),
                    error: e.to_string(),
                    content: crate::parse::serialize_document(&self.document),
                },
            );
            self.status = Some(self.messages.text(Msg::SaveFailed).to_string());
        }
    }
}
