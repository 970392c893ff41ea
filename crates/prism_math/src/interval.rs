/// A range of acceptable ray parameters t.
///
/// Intersection tests accept a hit either on the closed interval
/// ([`contains`](Interval::contains)) or the open interval
/// ([`surrounds`](Interval::surrounds)); spheres use the open test while
/// planes use the closed one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Returns the size of the interval (max - min).
    pub fn size(&self) -> f32 {
        self.max - self.min
    }

    /// Returns true if t is within the interval [min, max] (inclusive).
    pub fn contains(&self, t: f32) -> bool {
        self.min <= t && t <= self.max
    }

    /// Returns true if t is strictly within the interval (min, max) (exclusive).
    pub fn surrounds(&self, t: f32) -> bool {
        self.min < t && t < self.max
    }

    /// Shrink the upper bound to a closer hit distance.
    pub fn capped(&self, max: f32) -> Interval {
        Interval::new(self.min, max)
    }
}
