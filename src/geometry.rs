/// Integer coordinates of a grid cell, `x` grows to the right and `y` downwards.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Copy, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        let x_diff = (self.x - other.x) as f64;
        let y_diff = (self.y - other.y) as f64;
        (x_diff.powi(2) + y_diff.powi(2)).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Point::new(0, 0);
        let b = Point::new(3, 4);
        assert_eq!(a.distance(&b), 5.0);
        assert_eq!(b.distance(&a), 5.0);
        assert_eq!(a.distance(&Point::new(1, 1)), 2f64.sqrt());
        assert_eq!(a.distance(&a), 0.0);
    }
}
