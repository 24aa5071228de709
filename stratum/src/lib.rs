//! Warm start generation for 3D pallet loading optimizers.
//!
//! Clusters superitems (rigid stacks of items with a fixed footprint and
//! height) into height-compatible bands, packs each band's footprints into
//! pallet-sized layers with [`maxrects`] and assembles the binary
//! superitem x layer incidence matrices and layer height vectors a
//! mixed-integer optimizer consumes as initial variable values.

use once_cell::sync::Lazy;
use std::time::Instant;

/// Clustering superitems into height-compatible bands
pub mod cluster;

/// Configuration for warm start generation
pub mod config;

/// Entities to model superitems, groups, layers and warm starts
pub mod entities;

/// Importing superitem tables into this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

/// Assembling packed layers into warm start matrices
pub mod warm_start;

pub static EPOCH: Lazy<Instant> = Lazy::new(Instant::now);
