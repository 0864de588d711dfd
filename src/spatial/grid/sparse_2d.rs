use rustc_hash::FxHashMap;

/// Unbounded 2D grid with a default value for unset cells.
///
/// Rows are keyed by `y`, cells within a row by `x`. A row exists only while
/// it holds at least one cell.
#[derive(Clone, Debug)]
pub struct SparseGrid2D<T> {
    rows: FxHashMap<i32, FxHashMap<i32, T>>,
    default: T,
}

impl<T: Default> Default for SparseGrid2D<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> SparseGrid2D<T> {
    pub fn new(default: T) -> Self {
        Self {
            rows: FxHashMap::default(),
            default,
        }
    }

    /// The value returned for every cell that has not been set.
    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Stored value at `(x, y)`, or the default. Never allocates.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> &T {
        self.rows
            .get(&y)
            .and_then(|row| row.get(&x))
            .unwrap_or(&self.default)
    }

    /// Mutable access to an explicitly set cell. Unset cells return `None`
    /// rather than materializing a row.
    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut T> {
        self.rows.get_mut(&y).and_then(|row| row.get_mut(&x))
    }

    /// Store `value` at `(x, y)`, creating the row if needed.
    /// Returns the previously stored value, if any.
    pub fn set(&mut self, x: i32, y: i32, value: T) -> Option<T> {
        self.rows.entry(y).or_default().insert(x, value)
    }

    /// True if `(x, y)` was explicitly set, even to the default value.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.rows.get(&y).is_some_and(|row| row.contains_key(&x))
    }

    /// Remove all content.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Remove exactly one cell, deallocating its row if the row becomes empty.
    /// Returns the removed value, if the cell was set.
    pub fn clear_cell(&mut self, x: i32, y: i32) -> Option<T> {
        let row = self.rows.get_mut(&y)?;
        let removed = row.remove(&x);
        if row.is_empty() {
            self.rows.remove(&y);
        }
        removed
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of explicitly set cells.
    pub fn len(&self) -> usize {
        self.rows.values().map(|row| row.len()).sum()
    }

    /// Number of allocated rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Iterate explicitly set cells as `(x, y, value)` in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, &T)> + '_ {
        self.rows
            .iter()
            .flat_map(|(&y, row)| row.iter().map(move |(&x, value)| (x, y, value)))
    }
}
