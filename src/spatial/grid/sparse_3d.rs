use rustc_hash::FxHashMap;

use super::SparseGrid2D;

/// Unbounded 3D grid built from one [`SparseGrid2D`] per occupied z layer.
///
/// A layer exists only while it holds at least one cell; clearing the last
/// cell of a layer drops the layer together with its rows.
#[derive(Clone, Debug)]
pub struct SparseGrid3D<T> {
    layers: FxHashMap<i32, SparseGrid2D<T>>,
    default: T,
}

impl<T: Default> Default for SparseGrid3D<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> SparseGrid3D<T> {
    pub fn new(default: T) -> Self {
        Self {
            layers: FxHashMap::default(),
            default,
        }
    }

    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Stored value at `(x, y, z)`, or the default. Never allocates.
    #[inline]
    pub fn get(&self, x: i32, y: i32, z: i32) -> &T {
        match self.layers.get(&z) {
            Some(layer) => layer.get(x, y),
            None => &self.default,
        }
    }

    pub fn get_mut(&mut self, x: i32, y: i32, z: i32) -> Option<&mut T> {
        self.layers.get_mut(&z).and_then(|layer| layer.get_mut(x, y))
    }

    pub fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        self.layers.get(&z).is_some_and(|layer| layer.contains(x, y))
    }

    /// The layer at `z`, if any cell in it is set.
    pub fn layer(&self, z: i32) -> Option<&SparseGrid2D<T>> {
        self.layers.get(&z)
    }

    pub fn clear(&mut self) {
        self.layers.clear();
    }

    /// Remove exactly one cell. Empty rows are reclaimed by the layer, and an
    /// empty layer is reclaimed here.
    pub fn clear_cell(&mut self, x: i32, y: i32, z: i32) -> Option<T> {
        let layer = self.layers.get_mut(&z)?;
        let removed = layer.clear_cell(x, y);
        if layer.is_empty() {
            self.layers.remove(&z);
        }
        removed
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.layers.values().map(SparseGrid2D::len).sum()
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Iterate explicitly set cells as `(x, y, z, value)` in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32, i32, &T)> + '_ {
        self.layers
            .iter()
            .flat_map(|(&z, layer)| layer.iter().map(move |(x, y, value)| (x, y, z, value)))
    }
}

impl<T: Clone> SparseGrid3D<T> {
    /// Store `value` at `(x, y, z)`, creating the layer if needed.
    /// New layers inherit this grid's default.
    pub fn set(&mut self, x: i32, y: i32, z: i32, value: T) -> Option<T> {
        let default = &self.default;
        self.layers
            .entry(z)
            .or_insert_with(|| SparseGrid2D::new(default.clone()))
            .set(x, y, value)
    }
}
