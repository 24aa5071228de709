use anyhow::{Result, ensure};

/// Axis-aligned rectangular area of a bin.
/// The x-axis spans the bin's length, the y-axis its width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    pub x_min: f32,
    pub y_min: f32,
    pub x_max: f32,
    pub y_max: f32,
}

impl Region {
    pub fn try_new(x_min: f32, y_min: f32, x_max: f32, y_max: f32) -> Result<Self> {
        ensure!(
            x_min < x_max && y_min < y_max,
            "invalid region, x_min: {x_min}, x_max: {x_max}, y_min: {y_min}, y_max: {y_max}"
        );
        Ok(Region {
            x_min,
            y_min,
            x_max,
            y_max,
        })
    }

    pub fn length(&self) -> f32 {
        self.x_max - self.x_min
    }

    pub fn width(&self) -> f32 {
        self.y_max - self.y_min
    }

    pub fn area(&self) -> f32 {
        self.length() * self.width()
    }

    /// Whether a `length` x `width` rectangle fits inside `self` in its given orientation.
    pub fn fits(&self, length: f32, width: f32) -> bool {
        length <= self.length() && width <= self.width()
    }

    pub fn contains(&self, other: &Region) -> bool {
        self.x_min <= other.x_min
            && self.y_min <= other.y_min
            && self.x_max >= other.x_max
            && self.y_max >= other.y_max
    }

    /// Whether `self` and `other` share interior area. Touching edges do not count.
    pub fn overlaps(&self, other: &Region) -> bool {
        f32::max(self.x_min, other.x_min) < f32::min(self.x_max, other.x_max)
            && f32::max(self.y_min, other.y_min) < f32::min(self.y_max, other.y_max)
    }
}
