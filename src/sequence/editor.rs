//! Ordered-body mutation operations on a sequence.
//!
//! All operations are synchronous, validate their indices before touching the
//! body, and mark the sequence dirty on success. A failed operation leaves the
//! sequence exactly as it was.

use crate::error::{SyncError, SyncResult};
use super::model::{Color, Sequence, Step};

impl Sequence {
    /// Appends a step to the end of the body.
    pub fn push_step(&mut self, step: Step) {
        self.body.push(step);
        self.dirty = true;
    }

    /// Inserts a step at `insert_before`, shifting later steps one position
    /// down. `insert_before` may equal the body length (append).
    pub fn splice_step(&mut self, step: Step, insert_before: usize) -> SyncResult<()> {
        if insert_before > self.body.len() {
            return Err(SyncError::index_out_of_bounds(insert_before, self.body.len()));
        }
        self.body.insert(insert_before, step);
        self.dirty = true;
        Ok(())
    }

    /// Removes the step at `from`, then inserts `step` at `to` in the
    /// already-shortened body. Length is unchanged, so `to` ranges over
    /// `[0, len - 1]`.
    pub fn move_step(&mut self, step: Step, from: usize, to: usize) -> SyncResult<()> {
        let len = self.body.len();
        if from >= len {
            return Err(SyncError::index_out_of_bounds(from, len));
        }
        if to >= len {
            return Err(SyncError::index_out_of_bounds(to, len - 1));
        }
        self.body.remove(from);
        self.body.insert(to, step);
        self.dirty = true;
        Ok(())
    }

    /// Replaces the step at `index` in place.
    pub fn change_step(&mut self, index: usize, step: Step) -> SyncResult<()> {
        if index >= self.body.len() {
            return Err(SyncError::index_out_of_bounds(index, self.body.len()));
        }
        self.body[index] = step;
        self.dirty = true;
        Ok(())
    }

    /// Deletes and returns the step at `index`; later steps shift down.
    pub fn remove_step(&mut self, index: usize) -> SyncResult<Step> {
        if index >= self.body.len() {
            return Err(SyncError::index_out_of_bounds(index, self.body.len()));
        }
        let removed = self.body.remove(index);
        self.dirty = true;
        Ok(removed)
    }

    /// Records a comment on the step at `index`. The comment travels with the
    /// step through later reorders.
    pub fn add_comment(&mut self, index: usize, comment: impl Into<String>) -> SyncResult<()> {
        match self.body.get_mut(index) {
            Some(step) => {
                step.comment = Some(comment.into());
                self.dirty = true;
                Ok(())
            }
            None => Err(SyncError::index_out_of_bounds(index, self.body.len())),
        }
    }

    /// Renames the sequence.
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.dirty = true;
    }

    /// Changes the label color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use crate::error::SyncError;
    use crate::sequence::{Color, Sequence, Step};

    fn step(kind: &str) -> Step {
        Step::new(kind)
    }

    #[test]
    fn test_push_appends_and_marks_dirty() {
        let mut seq = Sequence::new();
        seq.push_step(step("a"));
        seq.push_step(step("b"));

        assert_eq!(seq.body.len(), 2);
        assert_eq!(seq.body[1].kind, "b");
        assert!(seq.dirty);
    }

    #[test]
    fn test_splice_shifts_later_steps() {
        let mut seq = Sequence::new().with_step(step("a")).with_step(step("b"));
        seq.splice_step(step("x"), 1).unwrap();

        let kinds: Vec<_> = seq.body.iter().map(|s| s.kind.as_str()).collect();
        assert_eq!(kinds, ["a", "x", "b"]);
        assert!(seq.dirty);
    }

    #[test]
    fn test_splice_at_len_appends() {
        let mut seq = Sequence::new().with_step(step("a"));
        seq.splice_step(step("z"), 1).unwrap();
        assert_eq!(seq.body[1].kind, "z");
    }

    #[test]
    fn test_splice_past_len_is_rejected_untouched() {
        let mut seq = Sequence::new().with_step(step("a"));
        let err = seq.splice_step(step("z"), 3).unwrap_err();

        assert!(matches!(
            err,
            SyncError::IndexOutOfBounds { index: 3, length: 1 }
        ));
        assert_eq!(seq.body.len(), 1);
        assert!(!seq.dirty);
    }

    #[test]
    fn test_move_interprets_target_in_shortened_body() {
        // [a, b, c]: move c from 2 to 0 -> [c, a, b]
        let mut seq = Sequence::new()
            .with_step(step("a"))
            .with_step(step("b"))
            .with_step(step("c"));
        seq.move_step(step("c"), 2, 0).unwrap();

        let kinds: Vec<_> = seq.body.iter().map(|s| s.kind.as_str()).collect();
        assert_eq!(kinds, ["c", "a", "b"]);
        assert_eq!(seq.body.len(), 3);
    }

    #[test]
    fn test_move_preserves_length_and_multiset() {
        let mut seq = Sequence::new()
            .with_step(step("a"))
            .with_step(step("b"))
            .with_step(step("c"));
        seq.move_step(step("a"), 0, 2).unwrap();

        let mut kinds: Vec<_> = seq.body.iter().map(|s| s.kind.clone()).collect();
        kinds.sort();
        assert_eq!(kinds, ["a", "b", "c"]);
        assert_eq!(seq.body[2].kind, "a");
    }

    #[test]
    fn test_move_rejects_target_past_shortened_body() {
        let mut seq = Sequence::new().with_step(step("a")).with_step(step("b"));
        let err = seq.move_step(step("a"), 0, 2).unwrap_err();

        assert!(matches!(
            err,
            SyncError::IndexOutOfBounds { index: 2, length: 1 }
        ));
        assert_eq!(seq.body.len(), 2);
        assert!(!seq.dirty);
    }

    #[test]
    fn test_change_replaces_without_shift() {
        let mut seq = Sequence::new().with_step(step("a")).with_step(step("b"));
        seq.change_step(0, step("x")).unwrap();

        let kinds: Vec<_> = seq.body.iter().map(|s| s.kind.as_str()).collect();
        assert_eq!(kinds, ["x", "b"]);
    }

    #[test]
    fn test_remove_shifts_down() {
        let mut seq = Sequence::new()
            .with_step(step("a"))
            .with_step(step("b"))
            .with_step(step("c"));
        let removed = seq.remove_step(1).unwrap();

        assert_eq!(removed.kind, "b");
        let kinds: Vec<_> = seq.body.iter().map(|s| s.kind.as_str()).collect();
        assert_eq!(kinds, ["a", "c"]);
    }

    #[test]
    fn test_remove_out_of_range_is_rejected() {
        let mut seq = Sequence::new().with_step(step("a"));
        assert!(seq.remove_step(1).is_err());
        assert_eq!(seq.body.len(), 1);
        assert!(!seq.dirty);
    }

    #[test]
    fn test_add_comment_lands_on_the_step() {
        let mut seq = Sequence::new().with_step(step("a")).with_step(step("b"));
        seq.add_comment(1, "double check the z axis").unwrap();

        assert_eq!(seq.body[0].comment, None);
        assert_eq!(
            seq.body[1].comment.as_deref(),
            Some("double check the z axis")
        );
        assert!(seq.dirty);

        // The comment follows the step when it moves.
        let commented = seq.body[1].clone();
        seq.move_step(commented, 1, 0).unwrap();
        assert_eq!(
            seq.body[0].comment.as_deref(),
            Some("double check the z axis")
        );
    }

    #[test]
    fn test_field_edits_mark_dirty() {
        let mut seq = Sequence::new();
        seq.rename("Water front bed");
        assert!(seq.dirty);

        let mut seq = Sequence::new();
        seq.set_color(Color::Blue);
        assert_eq!(seq.color, Color::Blue);
        assert!(seq.dirty);
    }

    #[test]
    fn test_editing_scenario_chain() {
        // create -> push A -> splice B at 0 -> move A from 1 to 0
        let mut seq = Sequence::new();
        assert!(seq.body.is_empty());

        seq.push_step(step("A"));
        let kinds: Vec<_> = seq.body.iter().map(|s| s.kind.as_str()).collect();
        assert_eq!(kinds, ["A"]);

        seq.splice_step(step("B"), 0).unwrap();
        let kinds: Vec<_> = seq.body.iter().map(|s| s.kind.as_str()).collect();
        assert_eq!(kinds, ["B", "A"]);

        seq.move_step(step("A"), 1, 0).unwrap();
        let kinds: Vec<_> = seq.body.iter().map(|s| s.kind.as_str()).collect();
        assert_eq!(kinds, ["A", "B"]);
        assert_eq!(seq.body.len(), 2);
    }
}
