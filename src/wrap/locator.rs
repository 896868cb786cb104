//! Cumulative visual heights for visual-row lookups.

use crate::wrap::WrapOffsetTable;

/// Running totals of visual heights over a [`WrapOffsetTable`].
///
/// `ends[i]` is the visual row just past logical line `i`. The index may
/// cover only a prefix of the table; [`extend`](Self::extend) fills in the
/// rest on demand and [`invalidate_from`](Self::invalidate_from) drops
/// totals that a splice made stale.
#[derive(Clone, Debug, Default)]
pub(crate) struct HeightIndex {
    ends: Vec<usize>,
}

impl HeightIndex {
    /// Forget totals for `row` and every line after it.
    pub(crate) fn invalidate_from(&mut self, row: usize) {
        self.ends.truncate(row);
    }

    /// Forget everything.
    pub(crate) fn clear(&mut self) {
        self.ends.clear();
    }

    /// Number of lines whose totals are current.
    pub(crate) fn valid_len(&self) -> usize {
        self.ends.len()
    }

    /// Bring the totals up to date with `table`.
    pub(crate) fn extend(&mut self, table: &WrapOffsetTable) {
        let covered = self.ends.len();
        if covered >= table.len() {
            self.ends.truncate(table.len());
            return;
        }
        let mut total = self.ends.last().copied().unwrap_or(0);
        self.ends.reserve(table.len() - covered);
        for offsets in table.iter().skip(covered) {
            total += offsets.len() + 1;
            self.ends.push(total);
        }
        tracing::trace!(from = covered, to = table.len(), "height index rebuilt");
    }

    /// Total visual height.
    pub(crate) fn total(&self) -> usize {
        self.ends.last().copied().unwrap_or(0)
    }

    /// Logical line containing visual row `offset`.
    pub(crate) fn line_at(&self, offset: usize) -> Option<usize> {
        let line = self.ends.partition_point(|&end| end <= offset);
        (line < self.ends.len()).then_some(line)
    }

    /// First visual row of logical line `line`.
    pub(crate) fn start_of(&self, line: usize) -> Option<usize> {
        if line >= self.ends.len() {
            return None;
        }
        Some(if line == 0 { 0 } else { self.ends[line - 1] })
    }
}
