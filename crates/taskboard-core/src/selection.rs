//! Single-selection state for list navigation, shared by UI surfaces.

#[derive(Clone, Debug, Default)]
pub struct SelectionState {
    selected_index: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn set(&mut self, index: Option<usize>) {
        self.selected_index = index;
    }

    pub fn clear(&mut self) {
        self.selected_index = None;
    }

    /// Move selection down, saturating at the last item.
    pub fn next(&mut self, max_count: usize) {
        if max_count == 0 {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(idx) => (idx + 1).min(max_count - 1),
            None => 0,
        });
    }

    /// Move selection up, saturating at the first item.
    pub fn prev(&mut self) {
        self.selected_index = Some(match self.selected_index {
            Some(idx) => idx.saturating_sub(1),
            None => 0,
        });
    }

    pub fn jump_to_first(&mut self) {
        self.selected_index = Some(0);
    }

    pub fn jump_to_last(&mut self, len: usize) {
        if len > 0 {
            self.selected_index = Some(len - 1);
        }
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected_index == Some(index)
    }

    /// Clamp selection to a valid index after the list shrinks.
    pub fn clamp(&mut self, max_count: usize) {
        if let Some(idx) = self.selected_index {
            if max_count == 0 {
                self.selected_index = None;
            } else if idx >= max_count {
                self.selected_index = Some(max_count - 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_and_prev_saturate() {
        let mut selection = SelectionState::new();
        selection.next(3);
        assert_eq!(selection.get(), Some(0));
        selection.next(3);
        selection.next(3);
        selection.next(3);
        assert_eq!(selection.get(), Some(2));

        selection.prev();
        assert_eq!(selection.get(), Some(1));
        selection.prev();
        selection.prev();
        assert_eq!(selection.get(), Some(0));
    }

    #[test]
    fn test_next_on_empty_list_keeps_no_selection() {
        let mut selection = SelectionState::new();
        selection.next(0);
        assert!(selection.get().is_none());
    }

    #[test]
    fn test_jump_bounds() {
        let mut selection = SelectionState::new();
        selection.jump_to_last(5);
        assert_eq!(selection.get(), Some(4));
        selection.jump_to_first();
        assert_eq!(selection.get(), Some(0));
        selection.jump_to_last(0);
        assert_eq!(selection.get(), Some(0));
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut selection = SelectionState::new();
        selection.set(Some(9));
        selection.clamp(4);
        assert_eq!(selection.get(), Some(3));
        selection.clamp(0);
        assert!(selection.get().is_none());
    }
}
