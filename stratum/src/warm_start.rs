use crate::cluster;
use crate::config::WarmStartConfig;
use crate::entities::{Group, GroupRow, GroupWarmStart, Layer, Pallet, Superitem, WarmStart};
use crate::util::assertions;
use anyhow::{Result, ensure};
use itertools::Itertools;
use log::info;
use maxrects::PackRect;
use ndarray::{Array1, Array2, Axis, concatenate};
use rayon::prelude::*;
use std::collections::HashMap;

/// Clusters `superitems` by height and assembles the globally indexed warm start.
pub fn build(
    superitems: &[Superitem],
    pallet: Pallet,
    config: &WarmStartConfig,
) -> Result<WarmStart> {
    debug_assert!(assertions::superitem_ids_correct(superitems));
    let groups = cluster::height_groups(superitems, config.height_tolerance);
    global(superitems.len(), &groups, pallet)
}

/// Clusters `superitems` by height and assembles one locally indexed warm
/// start per group.
pub fn build_per_group(
    superitems: &[Superitem],
    pallet: Pallet,
    config: &WarmStartConfig,
) -> Result<Vec<GroupWarmStart>> {
    debug_assert!(assertions::superitem_ids_correct(superitems));
    let groups = cluster::height_groups(superitems, config.height_tolerance);
    per_group(&groups, pallet, config.include_singleton_layers)
}

/// Assembles the warm start over all `groups`, indexed by global superitem id.
///
/// Each group is packed into layers independently; its sub-matrix has
/// `num_superitems` rows and one column per layer. The sub-matrices are
/// concatenated column-wise, so groups occupy disjoint column ranges and
/// layers of different groups are never merged.
pub fn global(num_superitems: usize, groups: &[Group], pallet: Pallet) -> Result<WarmStart> {
    debug_assert!(assertions::group_ids_within(groups, num_superitems));
    for group in groups {
        ensure_fits_pallet(&group.rows, pallet)?;
    }

    let parts: Vec<WarmStart> = groups
        .par_iter()
        .map(|group| -> Result<WarmStart> {
            let layers = pack_layers(&group.rows, pallet)?;
            Ok(assemble(num_superitems, &layers, |id| id))
        })
        .collect::<Result<_>>()?;

    let warm_start = concat_columns(num_superitems, parts);
    info!(
        "[WS] assembled {} layers for {} superitems across {} groups",
        warm_start.num_layers(),
        num_superitems,
        groups.len()
    );
    debug_assert!(assertions::covers_all_group_members(groups, &warm_start));
    Ok(warm_start)
}

/// Assembles one warm start per group, indexed by local row position, along
/// with the mapping from superitem id to row index.
///
/// With `include_singletons`, every group of two or more rows additionally
/// receives the identity fallback layers of [`singleton_layers`], so each of
/// its superitems has a standalone layer available to the optimizer no
/// matter where the packing heuristic placed it.
pub fn per_group(
    groups: &[Group],
    pallet: Pallet,
    include_singletons: bool,
) -> Result<Vec<GroupWarmStart>> {
    for group in groups {
        ensure_fits_pallet(&group.rows, pallet)?;
    }

    groups
        .par_iter()
        .map(|group| -> Result<GroupWarmStart> {
            let superitem_rows: HashMap<usize, usize> = group
                .rows
                .iter()
                .enumerate()
                .map(|(row_idx, row)| (row.superitem_id, row_idx))
                .collect();

            let layers = pack_layers(&group.rows, pallet)?;
            let mut warm_start = assemble(group.len(), &layers, |id| superitem_rows[&id]);

            if include_singletons && group.len() > 1 {
                let fallback = singleton_layers(group);
                warm_start = WarmStart {
                    incidence: concatenate(
                        Axis(1),
                        &[warm_start.incidence.view(), fallback.incidence.view()],
                    )
                    .expect("incidence matrices share the row axis"),
                    heights: concatenate(
                        Axis(0),
                        &[warm_start.heights.view(), fallback.heights.view()],
                    )
                    .expect("height vectors are one-dimensional"),
                };
            }

            Ok(GroupWarmStart {
                incidence: warm_start.incidence,
                heights: warm_start.heights,
                superitem_rows,
            })
        })
        .collect()
}

/// Assembles the warm start for all `superitems` at once, skipping the
/// height clustering: a single packing run over every footprint.
pub fn flat(superitems: &[Superitem], pallet: Pallet) -> Result<WarmStart> {
    debug_assert!(assertions::superitem_ids_correct(superitems));
    let rows = superitems.iter().map(GroupRow::new).collect_vec();
    ensure_fits_pallet(&rows, pallet)?;

    let layers = pack_layers(&rows, pallet)?;
    let warm_start = assemble(superitems.len(), &layers, |id| id);
    info!(
        "[WS] assembled {} layers for {} superitems without clustering",
        warm_start.num_layers(),
        superitems.len()
    );
    Ok(warm_start)
}

/// One trivially feasible layer per group member: the identity incidence
/// matrix and each row's own height, order preserved.
pub fn singleton_layers(group: &Group) -> WarmStart {
    let incidence: Array2<u8> = Array2::eye(group.len());
    let heights = Array1::from_iter(group.rows.iter().map(|row| row.height));
    WarmStart { incidence, heights }
}

/// Packs the footprints of `rows` into as many pallet-sized layers as needed.
fn pack_layers(rows: &[GroupRow], pallet: Pallet) -> Result<Vec<Layer>> {
    let rects = rows
        .iter()
        .map(|row| PackRect {
            length: row.length,
            width: row.width,
            id: row.superitem_id,
        })
        .collect_vec();

    let bins = maxrects::pack(&rects, pallet.length, pallet.width)?;
    let layers = bins
        .into_iter()
        .map(|placements| Layer::new(placements, rows))
        .collect_vec();
    debug_assert!(assertions::layers_disjoint_and_within(&layers, rows, pallet));
    Ok(layers)
}

/// Builds the incidence matrix and height vector of one packed group,
/// mapping each placed superitem id to its row through `row_of`.
fn assemble(num_rows: usize, layers: &[Layer], row_of: impl Fn(usize) -> usize) -> WarmStart {
    let mut incidence = Array2::<u8>::zeros((num_rows, layers.len()));
    let mut heights = Array1::<f32>::zeros(layers.len());
    for (layer_idx, layer) in layers.iter().enumerate() {
        for id in layer.superitem_ids() {
            incidence[[row_of(id), layer_idx]] = 1;
        }
        heights[layer_idx] = layer.height;
    }
    WarmStart { incidence, heights }
}

/// Concatenates the per-group warm starts column-wise.
fn concat_columns(num_rows: usize, parts: Vec<WarmStart>) -> WarmStart {
    if parts.is_empty() {
        return WarmStart {
            incidence: Array2::zeros((num_rows, 0)),
            heights: Array1::zeros(0),
        };
    }
    let incidence = concatenate(
        Axis(1),
        &parts.iter().map(|part| part.incidence.view()).collect_vec(),
    )
    .expect("all sub-matrices share the superitem axis");
    let heights = concatenate(
        Axis(0),
        &parts.iter().map(|part| part.heights.view()).collect_vec(),
    )
    .expect("height vectors are one-dimensional");
    WarmStart { incidence, heights }
}

/// Every superitem must fit the pallet in its given orientation before any
/// packing is attempted; there is no rotation to rescue an oversized one.
fn ensure_fits_pallet(rows: &[GroupRow], pallet: Pallet) -> Result<()> {
    for row in rows {
        ensure!(
            pallet.fits(row.length, row.width),
            "superitem {} ({} x {}) exceeds the pallet footprint ({} x {})",
            row.superitem_id,
            row.length,
            row.width,
            pallet.length,
            pallet.width
        );
    }
    Ok(())
}
