use crate::entities::{Group, GroupRow, Superitem};
use crate::util::assertions;
use itertools::Itertools;
use log::debug;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;

/// Partitions `superitems` into height-tolerant bands and removes rows whose
/// item content is already covered by a larger row in the same band.
///
/// Every band spans `[h, h + tolerance]` for one of the retained
/// representative heights `h`; bands may overlap. Within each band, rows are
/// ranked by decreasing `(num_items, stacked)` with ties keeping the original
/// insertion order, and a row is dropped when its flattened item set is a
/// subset of an earlier retained row's set. The top-ranked row of a band
/// always survives.
pub fn height_groups(superitems: &[Superitem], tolerance: f32) -> Vec<Group> {
    assert!(tolerance >= 0.0);

    let unique_heights = superitems
        .iter()
        .map(|superitem| superitem.height)
        .sorted_by_key(|&h| OrderedFloat(h))
        .dedup()
        .collect_vec();

    // reach of height i = index range of distinct heights within tolerance above it
    let reach_end = unique_heights
        .iter()
        .enumerate()
        .map(|(i, &h)| i + unique_heights[i..].partition_point(|&above| above - h <= tolerance))
        .collect_vec();

    // a height whose reach is covered by its predecessor's spans no new band
    let representative_heights = (0..unique_heights.len())
        .filter(|&i| i == 0 || reach_end[i] > reach_end[i - 1])
        .map(|i| unique_heights[i])
        .collect_vec();

    let groups = representative_heights
        .iter()
        .map(|&h| {
            let members = superitems
                .iter()
                .filter(|superitem| superitem.height >= h && superitem.height <= h + tolerance)
                .collect_vec();
            clean_group(h, &members)
        })
        .collect_vec();

    debug_assert!(groups.iter().all(assertions::no_dominated_rows));
    groups
}

/// Builds the cleaned group of one height band: memoizes the flattened item
/// sets, ranks the rows and drops the dominated ones.
fn clean_group(band_height: f32, members: &[&Superitem]) -> Group {
    let mut ranked = members
        .iter()
        .map(|&superitem| GroupRow::new(superitem))
        .collect_vec();
    // stable: ties keep the original row order
    ranked.sort_by_key(|row| Reverse((row.num_items, row.stacked)));

    let mut rows: Vec<GroupRow> = vec![];
    for row in ranked {
        let dominated = rows
            .iter()
            .any(|kept| row.flattened_items.is_subset(&kept.flattened_items));
        if dominated {
            debug!(
                "[CLUSTER] dropping superitem {} from the band at {}: its {} items are already covered",
                row.superitem_id, band_height, row.num_items
            );
        } else {
            rows.push(row);
        }
    }
    Group { rows }
}
