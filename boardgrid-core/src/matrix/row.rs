use std::ops::Index;

/// Row is a wrapper around [`Vec<Option<T>>`] and represents one row of a
/// [`Matrix`][super::Matrix].
///
/// `None` is an empty slot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Row<T>(Vec<Option<T>>);

impl<T> Row<T> {
    /// Create a new row with the length/size of `width`.
    ///
    /// Every slot is empty.
    #[must_use]
    pub fn new_empty(width: usize) -> Self {
        Self(empty_slots(width).collect())
    }

    /// Util function to return the length of [`Self`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns a reference to the slot at `idx`.
    #[must_use]
    pub fn get_slot(&self, idx: usize) -> Option<&Option<T>> {
        self.0.get(idx)
    }

    /// Returns a mutable reference to the slot at `idx`.
    pub fn get_mut_slot(&mut self, idx: usize) -> Option<&mut Option<T>> {
        self.0.get_mut(idx)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Option<T>> {
        self.0.iter()
    }

    /// Inserts `amount` empty slots starting at `idx`, shifting the rest right.
    ///
    /// `idx` past the end of the row appends.
    pub(crate) fn insert_empty(&mut self, idx: usize, amount: usize) {
        let idx = idx.min(self.0.len());
        self.0.splice(idx..idx, empty_slots(amount));
    }

    /// Deletes the slot at `idx`, the row gets one shorter.
    pub(crate) fn remove_slot(&mut self, idx: usize) -> Option<T> {
        self.0.remove(idx)
    }

    /// Deletes up to `amount` slots starting at `idx`.
    pub(crate) fn remove_slots(&mut self, idx: usize, amount: usize) {
        let start = idx.min(self.0.len());
        let end = idx.saturating_add(amount).min(self.0.len());
        self.0.drain(start..end);
    }

    pub(crate) fn truncate(&mut self, width: usize) {
        self.0.truncate(width);
    }
}

fn empty_slots<T>(amount: usize) -> impl Iterator<Item = Option<T>> {
    std::iter::repeat_with(|| None).take(amount)
}

impl<T> Default for Row<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> From<Vec<Option<T>>> for Row<T> {
    fn from(value: Vec<Option<T>>) -> Self {
        Self(value)
    }
}

impl<T> From<Row<T>> for Vec<Option<T>> {
    fn from(value: Row<T>) -> Self {
        value.0
    }
}

impl<T> IntoIterator for Row<T> {
    type Item = Option<T>;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Row<T> {
    type Item = &'a Option<T>;
    type IntoIter = std::slice::Iter<'a, Option<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T> Index<usize> for Row<T> {
    type Output = Option<T>;
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_empty_shifts_right() {
        let mut row = Row::from(vec![Some('a'), Some('b')]);
        row.insert_empty(1, 2);
        assert_eq!(Vec::from(row), vec![Some('a'), None, None, Some('b')]);
    }

    #[test]
    fn insert_empty_past_end_appends() {
        let mut row = Row::from(vec![Some(1)]);
        row.insert_empty(9, 1);
        assert_eq!(Vec::from(row), vec![Some(1), None]);
    }

    #[test]
    fn remove_slots_is_clamped_to_the_row() {
        let mut row = Row::from(vec![Some(1), Some(2), Some(3)]);
        row.remove_slots(1, 5);
        assert_eq!(Vec::from(row), vec![Some(1)]);
    }

    #[test]
    fn remove_slot_shrinks() {
        let mut row = Row::from(vec![Some(1), Some(2)]);
        assert_eq!(row.remove_slot(0), Some(1));
        assert_eq!(row.len(), 1);
        assert_eq!(row[0], Some(2));
    }
}
