//! Assignments and tests on the Tasks view.

use core_types::{Coursework, WorkKind};

use crate::{PlannerError, Result};

/// Two independent coursework lists plus the item whose submissions are open.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskBoard {
    assignments: Vec<Coursework>,
    tests: Vec<Coursework>,
    selected: Option<(WorkKind, String)>,
}

impl TaskBoard {
    /// Create a board with nothing selected.
    pub fn new(assignments: Vec<Coursework>, tests: Vec<Coursework>) -> Self {
        Self {
            assignments,
            tests,
            selected: None,
        }
    }

    pub fn assignments(&self) -> &[Coursework] {
        &self.assignments
    }

    pub fn tests(&self) -> &[Coursework] {
        &self.tests
    }

    /// The list holding items of `kind`.
    pub fn items(&self, kind: WorkKind) -> &[Coursework] {
        match kind {
            WorkKind::Assignment => &self.assignments,
            WorkKind::Test => &self.tests,
        }
    }

    fn items_mut(&mut self, kind: WorkKind) -> &mut Vec<Coursework> {
        match kind {
            WorkKind::Assignment => &mut self.assignments,
            WorkKind::Test => &mut self.tests,
        }
    }

    fn position(&self, kind: WorkKind, id: &str) -> Result<usize> {
        self.items(kind)
            .iter()
            .position(|w| w.id == id)
            .ok_or_else(|| PlannerError::WorkNotFound {
                kind,
                id: id.to_string(),
            })
    }

    /// Flip the checked marker of one item. Returns the new marker.
    ///
    /// Does not touch the selection.
    pub fn toggle_check(&mut self, kind: WorkKind, id: &str) -> Result<bool> {
        let idx = self.position(kind, id)?;
        let work = &mut self.items_mut(kind)[idx];
        work.toggle_checked();
        Ok(work.is_checked)
    }

    /// Select an item so its submissions are shown.
    pub fn open(&mut self, kind: WorkKind, id: &str) -> Result<()> {
        self.position(kind, id)?;
        self.selected = Some((kind, id.to_string()));
        Ok(())
    }

    /// Drop the selection.
    pub fn close(&mut self) {
        self.selected = None;
    }

    /// The selected item, if any.
    pub fn selected(&self) -> Option<&Coursework> {
        let (kind, id) = self.selected.as_ref()?;
        self.items(*kind).iter().find(|w| &w.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_board() -> TaskBoard {
        TaskBoard::new(
            fixtures::load_builtin_assignments(),
            fixtures::load_builtin_tests(),
        )
    }

    #[test]
    fn test_board_creation() {
        let board = create_test_board();

        assert_eq!(board.assignments().len(), 1);
        assert_eq!(board.tests().len(), 1);
        assert!(board.selected().is_none());
    }

    #[test]
    fn test_toggle_check_only_affects_one_list() {
        let mut board = create_test_board();

        // Both lists have an item with id "1"
        assert_eq!(board.toggle_check(WorkKind::Test, "1"), Ok(true));

        assert!(board.tests()[0].is_checked);
        assert!(board.assignments()[0].is_checked);

        assert_eq!(board.toggle_check(WorkKind::Assignment, "1"), Ok(false));
        assert!(!board.assignments()[0].is_checked);
        assert!(board.tests()[0].is_checked);
    }

    #[test]
    fn test_toggle_check_does_not_open() {
        let mut board = create_test_board();

        board.toggle_check(WorkKind::Assignment, "1").unwrap();

        assert!(board.selected().is_none());
    }

    #[test]
    fn test_toggle_check_leaves_submissions_alone() {
        let mut board = create_test_board();
        let before = board.tests()[0].submissions.clone();

        board.toggle_check(WorkKind::Test, "1").unwrap();

        assert_eq!(board.tests()[0].submissions, before);
    }

    #[test]
    fn test_open_and_close() {
        let mut board = create_test_board();

        board.open(WorkKind::Test, "1").unwrap();
        let selected = board.selected().unwrap();
        assert_eq!(selected.title, "Mid-term Test");
        assert_eq!(selected.submissions.len(), 3);

        board.close();
        assert!(board.selected().is_none());
    }

    #[test]
    fn test_selection_sees_later_toggles() {
        let mut board = create_test_board();

        board.open(WorkKind::Assignment, "1").unwrap();
        board.toggle_check(WorkKind::Assignment, "1").unwrap();

        assert!(!board.selected().unwrap().is_checked);
    }

    #[test]
    fn test_unknown_ids() {
        let mut board = create_test_board();

        assert_eq!(
            board.toggle_check(WorkKind::Assignment, "9"),
            Err(PlannerError::WorkNotFound {
                kind: WorkKind::Assignment,
                id: "9".to_string(),
            })
        );
        assert!(board.open(WorkKind::Test, "9").is_err());
        assert!(board.selected().is_none());
    }
}
