//! The shared trace container and its per-column sparse stores.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use p3_field::Field;
use p3_matrix::dense::RowMajorMatrix;

use crate::columns::{Column, NUM_TRACE_COLUMNS};

/// One sparse column: only nonzero entries are stored, keyed by row index.
///
/// The lock admits many concurrent readers or one writer, and is independent
/// of every other column's lock.
#[derive(Debug)]
struct SparseColumn<F> {
    rows: RwLock<BTreeMap<u32, F>>,
}

impl<F> SparseColumn<F> {
    fn new() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<u32, F>> {
        // A poisoned lock means a writer panicked mid-generation; the whole
        // generation is already lost at that point.
        self.rows.read().expect("poisoned column lock")
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<u32, F>> {
        self.rows.write().expect("poisoned column lock")
    }
}

/// The full witness table: one independently locked [`SparseColumn`] per
/// [`Column`].
///
/// A stored entry is never zero. Writing zero deletes the entry, and a
/// missing entry reads as zero; that is what keeps memory bounded for
/// columns that are mostly empty over millions of rows.
///
/// Operations on different columns never block each other. Within one
/// column, reads may proceed together and writes are exclusive.
#[derive(Debug)]
pub struct TraceContainer<F> {
    columns: Vec<SparseColumn<F>>,
}

impl<F: Field> TraceContainer<F> {
    pub fn new() -> Self {
        Self {
            columns: (0..NUM_TRACE_COLUMNS).map(|_| SparseColumn::new()).collect(),
        }
    }

    fn column(&self, col: Column) -> &SparseColumn<F> {
        &self.columns[col.index()]
    }

    /// Returns the value at `(col, row)`, or zero when no entry is present.
    ///
    /// Values are returned by copy, so they stay valid across later writes
    /// to the column.
    pub fn get(&self, col: Column, row: u32) -> F {
        self.column(col).read().get(&row).copied().unwrap_or(F::zero())
    }

    /// Batch form of [`get`](Self::get) for several columns at one row.
    pub fn get_multiple(&self, cols: &[Column], row: u32) -> Vec<F> {
        cols.iter().map(|&col| self.get(col, row)).collect()
    }

    /// Sets `(col, row)` to `value`.
    ///
    /// Writing zero removes any existing entry instead of storing it. Only
    /// `col`'s lock is taken; other columns remain accessible throughout.
    pub fn set(&self, col: Column, row: u32, value: F) {
        let mut rows = self.column(col).write();
        if value.is_zero() {
            rows.remove(&row);
        } else {
            rows.insert(row, value);
        }
    }

    /// Sets several columns at one row.
    ///
    /// Each column's write is locked independently; the row is not updated
    /// atomically across columns. Callers needing cross-column row atomicity
    /// must coordinate externally.
    pub fn set_row(&self, row: u32, values: &[(Column, F)]) {
        for &(col, value) in values {
            self.set(col, row, value);
        }
    }

    /// Returns `(max populated row) + 1`, or 0 for an empty column.
    ///
    /// Recomputed from the column's keys on every call, never cached: a
    /// cache would have to notice that writing zero to the maximum row
    /// shrinks the column.
    pub fn get_column_size(&self, col: Column) -> u32 {
        self.column(col).read().keys().next_back().map_or(0, |row| row + 1)
    }

    /// Returns the maximum column size over all columns.
    pub fn get_num_rows(&self) -> u32 {
        Column::ALL
            .iter()
            .map(|&col| self.get_column_size(col))
            .max()
            .unwrap_or(0)
    }

    /// Invokes `visitor` once per present `(row, value)` entry, in ascending
    /// row order. The column's shared lock is held for the duration.
    pub fn visit_column(&self, col: Column, mut visitor: impl FnMut(u32, &F)) {
        for (&row, value) in self.column(col).read().iter() {
            visitor(row, value);
        }
    }

    /// Discards every entry in the column, releasing its memory.
    pub fn clear_column(&self, col: Column) {
        self.column(col).write().clear();
    }

    /// Densifies the first `num_rows` rows into the row-major layout the
    /// proving pipeline consumes. Absent entries become zero; entries at or
    /// beyond `num_rows` are ignored.
    pub fn to_row_major(&self, num_rows: u32) -> RowMajorMatrix<F> {
        let mut values = vec![F::zero(); num_rows as usize * NUM_TRACE_COLUMNS];
        for (i, &col) in Column::ALL.iter().enumerate() {
            self.visit_column(col, |row, value| {
                if row < num_rows {
                    values[row as usize * NUM_TRACE_COLUMNS + i] = *value;
                }
            });
        }
        RowMajorMatrix::new(values, NUM_TRACE_COLUMNS)
    }
}

impl<F: Field> Default for TraceContainer<F> {
    fn default() -> Self {
        Self::new()
    }
}
