/// Checks on the invariants of groups, layers and warm starts
pub mod assertions;
