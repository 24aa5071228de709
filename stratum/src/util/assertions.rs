use crate::entities::{Group, GroupRow, Layer, Pallet, Superitem, WarmStart};
use maxrects::{Placement, Region};

/// All superitem ids match their position in the collection.
pub fn superitem_ids_correct(superitems: &[Superitem]) -> bool {
    superitems
        .iter()
        .enumerate()
        .all(|(i, superitem)| superitem.id == i)
}

/// All group members reference superitem ids below `num_superitems`.
pub fn group_ids_within(groups: &[Group], num_superitems: usize) -> bool {
    groups
        .iter()
        .flat_map(|group| group.rows.iter())
        .all(|row| row.superitem_id < num_superitems)
}

/// No retained row's flattened item set is contained in another retained row's set.
pub fn no_dominated_rows(group: &Group) -> bool {
    group.rows.iter().enumerate().all(|(i, row)| {
        group
            .rows
            .iter()
            .enumerate()
            .all(|(j, other)| i == j || !row.flattened_items.is_subset(&other.flattened_items))
    })
}

/// Placements lie within the pallet footprint and no two overlap within a layer.
pub fn layers_disjoint_and_within(layers: &[Layer], rows: &[GroupRow], pallet: Pallet) -> bool {
    let footprint = |placement: &Placement| -> Option<Region> {
        let row = rows.iter().find(|row| row.superitem_id == placement.id)?;
        Region::try_new(
            placement.x,
            placement.y,
            placement.x + row.length,
            placement.y + row.width,
        )
        .ok()
    };
    let bounds = match Region::try_new(0.0, 0.0, pallet.length, pallet.width) {
        Ok(bounds) => bounds,
        Err(_) => return false,
    };

    layers.iter().all(|layer| {
        let regions = layer
            .placements
            .iter()
            .map(footprint)
            .collect::<Option<Vec<_>>>();
        let Some(regions) = regions else {
            return false;
        };
        regions.iter().all(|region| bounds.contains(region))
            && regions.iter().enumerate().all(|(i, region)| {
                regions[..i].iter().all(|other| !region.overlaps(other))
            })
    })
}

/// Every superitem retained in any group is placed in at least one layer.
pub fn covers_all_group_members(groups: &[Group], warm_start: &WarmStart) -> bool {
    groups
        .iter()
        .flat_map(|group| group.rows.iter())
        .all(|row| {
            warm_start
                .incidence
                .row(row.superitem_id)
                .iter()
                .any(|&v| v == 1)
        })
}
