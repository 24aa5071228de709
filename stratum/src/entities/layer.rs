use crate::entities::GroupRow;
use maxrects::Placement;
use ordered_float::OrderedFloat;

/// One packed layer: non-overlapping placements within the pallet footprint
/// and the height the layer occupies in the load.
#[derive(Clone, Debug)]
pub struct Layer {
    pub placements: Vec<Placement>,
    /// Height of the tallest superitem placed in the layer
    pub height: f32,
}

impl Layer {
    /// Derives a layer from the placements of one packed bin.
    /// A layer must be tall enough to support its tallest occupant, so its
    /// height is the maximum over the placed superitems, never an average.
    pub fn new(placements: Vec<Placement>, rows: &[GroupRow]) -> Self {
        let height = placements
            .iter()
            .map(|placement| {
                rows.iter()
                    .find(|row| row.superitem_id == placement.id)
                    .expect("placed superitem does not belong to the group")
                    .height
            })
            .max_by_key(|&h| OrderedFloat(h))
            .expect("layer contains no superitems");
        Layer { placements, height }
    }

    /// Ids of the superitems placed in this layer.
    pub fn superitem_ids(&self) -> impl Iterator<Item = usize> + '_ {
        self.placements.iter().map(|placement| placement.id)
    }
}
