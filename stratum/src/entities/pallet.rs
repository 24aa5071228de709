use anyhow::{Result, ensure};

/// Footprint of the pallet every layer must fit on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pallet {
    pub length: f32,
    pub width: f32,
}

impl Pallet {
    pub fn try_new(length: f32, width: f32) -> Result<Self> {
        ensure!(
            length > 0.0 && width > 0.0,
            "invalid pallet footprint: {length} x {width}"
        );
        Ok(Pallet { length, width })
    }

    /// Whether a `length` x `width` footprint fits on the pallet without rotation.
    pub fn fits(&self, length: f32, width: f32) -> bool {
        length <= self.length && width <= self.width
    }
}
