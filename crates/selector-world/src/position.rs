//! World positions and distance math.

/// Position in the world.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Squared euclidean distance to `other`.
    pub fn distance_sq(&self, other: Position) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        dx * dx + dy * dy + dz * dz
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: Position) -> f32 {
        self.distance_sq(other).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_basic() {
        let a = Position::new(0.0, 0.0, 0.0);
        let b = Position::new(3.0, 4.0, 0.0);
        assert_eq!(a.distance_sq(b), 25.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
    }

    #[test]
    fn distance_to_self_is_zero() {
        let p = Position::new(12.5, 64.0, -7.25);
        assert_eq!(p.distance(p), 0.0);
    }

    #[test]
    fn default_is_origin() {
        assert_eq!(Position::default(), Position::new(0.0, 0.0, 0.0));
    }
}
