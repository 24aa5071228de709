use anyhow::{Result, ensure};
use std::collections::HashSet;

/// A rigid, precomputed stack of one or more items, treated as a single 2D
/// footprint with a fixed height.
#[derive(Clone, Debug)]
pub struct Superitem {
    /// Position of this superitem in the input table
    pub id: usize,
    pub length: f32,
    pub width: f32,
    pub height: f32,
    /// Whether this superitem is composed of multiple stacked tiers
    pub stacked: bool,
    /// Composition of the items it covers
    pub items: ItemTree,
}

impl Superitem {
    pub fn try_new(
        id: usize,
        length: f32,
        width: f32,
        height: f32,
        stacked: bool,
        items: ItemTree,
    ) -> Result<Self> {
        ensure!(
            length > 0.0 && width > 0.0 && height > 0.0,
            "superitem {id} has invalid dimensions: {length} x {width} x {height}"
        );
        ensure!(
            !items.flatten().is_empty(),
            "superitem {id} does not cover any items"
        );
        Ok(Superitem {
            id,
            length,
            width,
            height,
            stacked,
            items,
        })
    }
}

/// Arbitrary-depth composition of the base items covered by a [`Superitem`].
#[derive(Clone, Debug)]
pub enum ItemTree {
    /// A single base item
    Item(usize),
    /// A stack of compositions
    Stack(Vec<ItemTree>),
}

impl ItemTree {
    /// The set of base item ids at the leaves of the composition.
    pub fn flatten(&self) -> HashSet<usize> {
        let mut items = HashSet::new();
        self.collect_leaves(&mut items);
        items
    }

    fn collect_leaves(&self, items: &mut HashSet<usize>) {
        match self {
            ItemTree::Item(id) => {
                items.insert(*id);
            }
            ItemTree::Stack(parts) => {
                for part in parts {
                    part.collect_leaves(items);
                }
            }
        }
    }
}
