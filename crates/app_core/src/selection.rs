//! Photo selection set

use crate::photo::PhotoId;

/// Insertion-ordered set of selected photo ids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    ids: Vec<PhotoId>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the id if absent, remove it if present
    pub fn toggle(&mut self, id: PhotoId) {
        if let Some(pos) = self.ids.iter().position(|selected| *selected == id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(id);
        }
    }

    pub fn contains(&self, id: PhotoId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[PhotoId] {
        &self.ids
    }

    /// The only selected id, if exactly one is selected
    pub fn single(&self) -> Option<PhotoId> {
        match self.ids.as_slice() {
            [id] => Some(*id),
            _ => None,
        }
    }

    /// Replace the whole selection; duplicates keep their first position
    pub fn replace(&mut self, ids: impl IntoIterator<Item = PhotoId>) {
        self.ids.clear();
        for id in ids {
            if !self.ids.contains(&id) {
                self.ids.push(id);
            }
        }
    }

    /// Add every id that is not yet selected
    pub fn select_all(&mut self, ids: impl IntoIterator<Item = PhotoId>) {
        for id in ids {
            if !self.ids.contains(&id) {
                self.ids.push(id);
            }
        }
    }

    /// Remove every given id
    pub fn deselect_all(&mut self, ids: impl IntoIterator<Item = PhotoId>) {
        let remove: Vec<PhotoId> = ids.into_iter().collect();
        self.ids.retain(|id| !remove.contains(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_restores_original() {
        let mut selection = SelectionState::new();
        selection.toggle(PhotoId(3));
        let before = selection.clone();

        selection.toggle(PhotoId(9));
        selection.toggle(PhotoId(9));
        assert_eq!(selection, before);

        selection.toggle(PhotoId(3));
        selection.toggle(PhotoId(3));
        assert_eq!(selection, before);
    }

    #[test]
    fn test_insertion_order_kept() {
        let mut selection = SelectionState::new();
        for id in [5, 2, 8] {
            selection.toggle(PhotoId(id));
        }
        selection.toggle(PhotoId(2));
        assert_eq!(selection.ids(), &[PhotoId(5), PhotoId(8)]);
    }

    #[test]
    fn test_single() {
        let mut selection = SelectionState::new();
        assert_eq!(selection.single(), None);
        selection.toggle(PhotoId(4));
        assert_eq!(selection.single(), Some(PhotoId(4)));
        selection.toggle(PhotoId(6));
        assert_eq!(selection.single(), None);
    }

    #[test]
    fn test_replace_collapses_duplicates() {
        let mut selection = SelectionState::new();
        selection.toggle(PhotoId(1));
        selection.replace([PhotoId(7), PhotoId(3), PhotoId(7)]);
        assert_eq!(selection.ids(), &[PhotoId(7), PhotoId(3)]);
    }

    #[test]
    fn test_select_and_deselect_page() {
        let mut selection = SelectionState::new();
        selection.toggle(PhotoId(30));

        let page = [PhotoId(1), PhotoId(2), PhotoId(3)];
        selection.select_all(page);
        assert_eq!(selection.len(), 4);

        selection.deselect_all(page);
        assert_eq!(selection.ids(), &[PhotoId(30)]);
    }
}
