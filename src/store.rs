//! Working collection of sequences and its command dispatcher.
//!
//! `SequenceStore` owns every sequence the client is editing or viewing.
//! All mutation flows through [`SequenceStore::apply`], one command at a
//! time: a command either applies fully or returns an error having changed
//! nothing. Callers that hold `&mut SequenceStore` are the single writer, so
//! readers between commands always observe a consistent snapshot.

use crate::error::{SyncError, SyncResult};
use crate::sequence::{Color, Sequence, Step};

/// The closed command vocabulary consumed by the store.
///
/// Step and field edits target the currently selected sequence. The
/// `FetchedAll`/`Saved`/`Deleted` variants reconcile server responses back
/// into the collection and are issued by the sync gateway.
#[derive(Debug, Clone)]
pub enum Command {
    /// Append a fresh unsaved sequence and select it.
    Add,
    /// Select the sequence at `index` for editing.
    Select(usize),
    /// Edit name and/or color of the current sequence.
    Edit {
        name: Option<String>,
        color: Option<Color>,
    },
    /// Append a step to the current sequence's body.
    PushStep(Step),
    /// Insert a step before `insert_before` in the current sequence's body.
    SpliceStep { step: Step, insert_before: usize },
    /// Remove at `from`, insert `step` at `to` in the shortened body.
    MoveStep { step: Step, from: usize, to: usize },
    /// Replace the step at `index`.
    ChangeStep { index: usize, step: Step },
    /// Delete the step at `index`.
    RemoveStep { index: usize },
    /// Record a comment on the step at `index`.
    AddComment { index: usize, comment: String },
    /// Replace the whole collection with the server's (full refresh).
    FetchedAll(Vec<Sequence>),
    /// Replace the working copy at `index` with the server's canonical
    /// response after a successful persist.
    Saved {
        index: usize,
        canonical: Sequence,
    },
    /// Remove the sequence at `index` from the collection.
    Deleted { index: usize },
}

/// In-memory working collection with a selection cursor.
#[derive(Debug, Default)]
pub struct SequenceStore {
    all: Vec<Sequence>,
    current: Option<usize>,
}

impl SequenceStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// All sequences, in collection order.
    pub fn all(&self) -> &[Sequence] {
        &self.all
    }

    /// Number of sequences in the collection.
    pub fn len(&self) -> usize {
        self.all.len()
    }

    /// True if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// The sequence at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Sequence> {
        self.all.get(index)
    }

    /// The currently selected sequence, if any.
    pub fn current(&self) -> Option<&Sequence> {
        self.current.and_then(|i| self.all.get(i))
    }

    /// Index of the currently selected sequence.
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Applies one command atomically. On error the store is unchanged.
    pub fn apply(&mut self, command: Command) -> SyncResult<()> {
        match command {
            Command::Add => {
                self.all.push(Sequence::new());
                self.current = Some(self.all.len() - 1);
                Ok(())
            }
            Command::Select(index) => {
                if index >= self.all.len() {
                    return Err(SyncError::SequenceNotFound(index));
                }
                self.current = Some(index);
                Ok(())
            }
            Command::Edit { name, color } => {
                let seq = self.current_mut()?;
                if let Some(name) = name {
                    seq.rename(name);
                }
                if let Some(color) = color {
                    seq.set_color(color);
                }
                Ok(())
            }
            Command::PushStep(step) => {
                self.current_mut()?.push_step(step);
                Ok(())
            }
            Command::SpliceStep {
                step,
                insert_before,
            } => self.current_mut()?.splice_step(step, insert_before),
            Command::MoveStep { step, from, to } => self.current_mut()?.move_step(step, from, to),
            Command::ChangeStep { index, step } => self.current_mut()?.change_step(index, step),
            Command::RemoveStep { index } => self.current_mut()?.remove_step(index).map(|_| ()),
            Command::AddComment { index, comment } => {
                self.current_mut()?.add_comment(index, comment)
            }
            Command::FetchedAll(sequences) => {
                self.all = sequences;
                self.current = None;
                Ok(())
            }
            Command::Saved {
                index,
                mut canonical,
            } => {
                if index >= self.all.len() {
                    return Err(SyncError::SequenceNotFound(index));
                }
                canonical.dirty = false;
                self.all[index] = canonical;
                Ok(())
            }
            Command::Deleted { index } => {
                if index >= self.all.len() {
                    return Err(SyncError::SequenceNotFound(index));
                }
                self.all.remove(index);
                match self.current {
                    Some(cur) if cur == index => self.current = None,
                    Some(cur) if cur > index => self.current = Some(cur - 1),
                    _ => {}
                }
                Ok(())
            }
        }
    }

    fn current_mut(&mut self) -> SyncResult<&mut Sequence> {
        let index = self.current.ok_or(SyncError::NoSelection)?;
        self.all.get_mut(index).ok_or(SyncError::NoSelection)
    }
}
