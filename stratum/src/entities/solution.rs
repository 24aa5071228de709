use ndarray::{Array1, Array2};
use std::collections::HashMap;

/// Warm start values for the optimizer: which superitem sits in which layer
/// and how tall each layer is.
#[derive(Clone, Debug)]
pub struct WarmStart {
    /// Binary superitem x layer matrix: 1 iff the superitem is placed in the layer
    pub incidence: Array2<u8>,
    /// Height of each layer, aligned with the columns of `incidence`
    pub heights: Array1<f32>,
}

impl WarmStart {
    pub fn num_superitems(&self) -> usize {
        self.incidence.nrows()
    }

    pub fn num_layers(&self) -> usize {
        self.incidence.ncols()
    }
}

/// Warm start of a single group, indexed by local row position instead of
/// global superitem id.
#[derive(Clone, Debug)]
pub struct GroupWarmStart {
    /// Binary row x layer matrix over the group's own rows
    pub incidence: Array2<u8>,
    /// Height of each layer, aligned with the columns of `incidence`
    pub heights: Array1<f32>,
    /// Row in `incidence` of each superitem id
    pub superitem_rows: HashMap<usize, usize>,
}
