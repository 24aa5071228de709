//! Offline 2D rectangle packing into an unlimited supply of identical bins.
//!
//! Implements the MaxRects data structure with a global best-area-fit
//! placement policy: rectangles are sorted by decreasing area and, bin per
//! bin, the remaining rectangle with the tightest fit is placed until none
//! fits anymore. Rectangles are never rotated.

mod packer;
mod region;

pub use packer::{PackRect, Placement, pack};
pub use region::Region;
