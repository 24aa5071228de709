mod group;
mod layer;
mod pallet;
mod solution;
mod superitem;

pub use group::{Group, GroupRow};
pub use layer::Layer;
pub use pallet::Pallet;
pub use solution::{GroupWarmStart, WarmStart};
pub use superitem::{ItemTree, Superitem};
