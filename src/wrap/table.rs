//! Per-line storage of wrap offsets.

use crate::error::{Error, Result};

/// Wrap offsets for every logical line of a document.
///
/// Entry `i` holds the ascending char offsets inside line `i` where a visual
/// line break occurs, so line `i` is `entry.len() + 1` visual rows tall.
/// Entries are replaced whole and never edited in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WrapOffsetTable {
    entries: Vec<Vec<usize>>,
}

impl WrapOffsetTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Create a table from precomputed entries.
    #[must_use]
    pub fn from_entries(entries: Vec<Vec<usize>>) -> Self {
        Self { entries }
    }

    /// Number of logical lines in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Offsets stored for line `index`.
    pub fn get(&self, index: usize) -> Result<&[usize]> {
        self.entries
            .get(index)
            .map(Vec::as_slice)
            .ok_or(Error::LineOutOfRange {
                index,
                line_count: self.entries.len(),
            })
    }

    /// Visual height of line `index`.
    pub fn height(&self, index: usize) -> Result<usize> {
        self.get(index).map(|offsets| offsets.len() + 1)
    }

    /// Sum of all visual heights.
    #[must_use]
    pub fn total_height(&self) -> usize {
        self.entries.iter().map(|offsets| offsets.len() + 1).sum()
    }

    /// Iterate over the entries in line order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &[usize]> {
        self.entries.iter().map(Vec::as_slice)
    }

    /// Replace the entries in `start..end` with `new_entries`.
    ///
    /// Entries after `end` keep their order and shift by
    /// `new_entries.len() - (end - start)`. On error the table is untouched.
    pub fn replace_range(
        &mut self,
        start: usize,
        end: usize,
        new_entries: Vec<Vec<usize>>,
    ) -> Result<()> {
        if start > end || end > self.entries.len() {
            return Err(Error::SpliceOutOfRange {
                start,
                end,
                len: self.entries.len(),
            });
        }
        self.entries.splice(start..end, new_entries);
        Ok(())
    }
}

impl From<Vec<Vec<usize>>> for WrapOffsetTable {
    fn from(entries: Vec<Vec<usize>>) -> Self {
        Self::from_entries(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> WrapOffsetTable {
        WrapOffsetTable::from_entries(vec![vec![5, 10], vec![], vec![3]])
    }

    #[test]
    fn test_get_in_bounds() {
        let table = table();
        assert_eq!(table.get(0).unwrap(), &[5, 10]);
        assert_eq!(table.get(1).unwrap(), &[] as &[usize]);
        assert_eq!(table.height(2).unwrap(), 2);
        assert_eq!(table.total_height(), 6);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let table = table();
        assert_eq!(
            table.get(3),
            Err(Error::LineOutOfRange {
                index: 3,
                line_count: 3
            })
        );
        assert!(WrapOffsetTable::new().get(0).is_err());
    }

    #[test]
    fn test_replace_range_grows() {
        let mut table = table();
        table
            .replace_range(1, 2, vec![vec![1], vec![2], vec![]])
            .unwrap();
        let entries: Vec<_> = table.iter().collect();
        assert_eq!(
            entries,
            vec![&[5, 10][..], &[1][..], &[2][..], &[][..], &[3][..]]
        );
    }

    #[test]
    fn test_replace_range_shrinks() {
        let mut table = table();
        table.replace_range(0, 2, vec![vec![7]]).unwrap();
        assert_eq!(table, WrapOffsetTable::from(vec![vec![7], vec![3]]));
    }

    #[test]
    fn test_replace_range_pure_insert_and_append() {
        let mut table = table();
        table.replace_range(0, 0, vec![vec![]]).unwrap();
        table.replace_range(4, 4, vec![vec![9]]).unwrap();
        assert_eq!(table.len(), 5);
        assert_eq!(table.get(0).unwrap(), &[] as &[usize]);
        assert_eq!(table.get(1).unwrap(), &[5, 10]);
        assert_eq!(table.get(4).unwrap(), &[9]);
    }

    #[test]
    fn test_replace_range_rejects_bad_bounds() {
        let mut table = table();
        assert!(table.replace_range(2, 1, Vec::new()).is_err());
        assert!(table.replace_range(0, 4, Vec::new()).is_err());
        assert_eq!(table, self::table());
    }
}
