use crate::region::Region;
use anyhow::{Result, ensure};
use itertools::Itertools;
use log::debug;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;

/// A rectangle to be packed. `length` spans the bin's x-axis, `width` its y-axis.
#[derive(Clone, Copy, Debug)]
pub struct PackRect {
    pub length: f32,
    pub width: f32,
    /// Caller-defined identifier, reported back in the resulting [`Placement`]
    pub id: usize,
}

impl PackRect {
    pub fn area(&self) -> f32 {
        self.length * self.width
    }
}

/// Position of a packed rectangle: its minimum corner within the bin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub id: usize,
    pub x: f32,
    pub y: f32,
}

/// Packs all `rects` into as many `bin_length` x `bin_width` bins as needed,
/// returning the placements per bin.
///
/// Offline batch mode: the rectangles are sorted by decreasing area upfront.
/// Bins are opened on demand, one at a time; among the remaining rectangles,
/// the one with the globally tightest (best-area) fit in the open bin is
/// placed, until no remaining rectangle fits and the next bin is opened.
/// Rotation is never applied. The result is deterministic for a fixed input.
///
/// Every rectangle ends up in exactly one bin: a rectangle that cannot fit
/// an empty bin in its given orientation is an error, not a silent drop.
pub fn pack(rects: &[PackRect], bin_length: f32, bin_width: f32) -> Result<Vec<Vec<Placement>>> {
    ensure!(
        bin_length > 0.0 && bin_width > 0.0,
        "invalid bin dimensions: {bin_length} x {bin_width}"
    );
    for rect in rects {
        ensure!(
            rect.length > 0.0 && rect.width > 0.0,
            "rectangle {} has invalid dimensions: {} x {}",
            rect.id,
            rect.length,
            rect.width
        );
        ensure!(
            rect.length <= bin_length && rect.width <= bin_width,
            "rectangle {} ({} x {}) does not fit an empty bin ({} x {}), rotation is disabled",
            rect.id,
            rect.length,
            rect.width,
            bin_length,
            bin_width
        );
    }

    let mut pending = rects
        .iter()
        .copied()
        .sorted_by_key(|rect| Reverse(OrderedFloat(rect.area())))
        .collect_vec();

    let mut bins = vec![];
    while !pending.is_empty() {
        let mut bin = Bin::new(bin_length, bin_width);
        while let Some((rect_idx, region_idx)) = bin.best_fit(&pending) {
            let rect = pending.remove(rect_idx);
            bin.place(rect, region_idx);
        }
        // every rect fits an empty bin, so each opened bin receives at least one
        debug_assert!(!bin.placements.is_empty());
        debug!(
            "[MAXRECTS] closed bin {} with {} rects, {} remaining",
            bins.len(),
            bin.placements.len(),
            pending.len()
        );
        bins.push(bin.placements);
    }
    Ok(bins)
}

/// A single open bin: the rectangles placed so far and the maximal free
/// regions still available.
struct Bin {
    free: Vec<Region>,
    placements: Vec<Placement>,
}

impl Bin {
    fn new(length: f32, width: f32) -> Self {
        let whole = Region {
            x_min: 0.0,
            y_min: 0.0,
            x_max: length,
            y_max: width,
        };
        Bin {
            free: vec![whole],
            placements: vec![],
        }
    }

    /// The (rect, free region) index pair with the smallest leftover area,
    /// if any rect fits. Ties resolve to the earlier rect and region.
    fn best_fit(&self, pending: &[PackRect]) -> Option<(usize, usize)> {
        pending
            .iter()
            .enumerate()
            .filter_map(|(rect_idx, rect)| {
                self.free
                    .iter()
                    .enumerate()
                    .filter(|(_, region)| region.fits(rect.length, rect.width))
                    .min_by_key(|(_, region)| OrderedFloat(region.area() - rect.area()))
                    .map(|(region_idx, region)| {
                        (
                            OrderedFloat(region.area() - rect.area()),
                            rect_idx,
                            region_idx,
                        )
                    })
            })
            .min_by_key(|&(leftover, ..)| leftover)
            .map(|(_, rect_idx, region_idx)| (rect_idx, region_idx))
    }

    /// Places `rect` at the minimum corner of the free region at `region_idx`
    /// and rebuilds the free region list.
    fn place(&mut self, rect: PackRect, region_idx: usize) {
        let target = self.free[region_idx];
        let placed = Region {
            x_min: target.x_min,
            y_min: target.y_min,
            x_max: target.x_min + rect.length,
            y_max: target.y_min + rect.width,
        };
        self.placements.push(Placement {
            id: rect.id,
            x: placed.x_min,
            y: placed.y_min,
        });

        //split every free region the rect overlaps into its residual slabs
        let mut residuals = vec![];
        for region in &self.free {
            if !region.overlaps(&placed) {
                residuals.push(*region);
                continue;
            }
            if placed.x_min > region.x_min {
                residuals.push(Region {
                    x_max: placed.x_min,
                    ..*region
                });
            }
            if placed.x_max < region.x_max {
                residuals.push(Region {
                    x_min: placed.x_max,
                    ..*region
                });
            }
            if placed.y_min > region.y_min {
                residuals.push(Region {
                    y_max: placed.y_min,
                    ..*region
                });
            }
            if placed.y_max < region.y_max {
                residuals.push(Region {
                    y_min: placed.y_max,
                    ..*region
                });
            }
        }
        self.free = prune(residuals);
    }
}

/// Removes every region contained in another, keeping only maximal regions.
fn prune(regions: Vec<Region>) -> Vec<Region> {
    let mut maximal: Vec<Region> = Vec::with_capacity(regions.len());
    for region in regions {
        if maximal.iter().any(|kept| kept.contains(&region)) {
            continue;
        }
        maximal.retain(|kept| !region.contains(kept));
        maximal.push(region);
    }
    maximal
}
