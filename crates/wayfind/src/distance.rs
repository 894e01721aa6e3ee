//! Distance functions on integer grid coordinates, for use as heuristics.

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: (i32, i32), b: (i32, i32)) -> f32 {
    ((a.0 - b.0).abs() + (a.1 - b.1).abs()) as f32
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: (i32, i32), b: (i32, i32)) -> f32 {
    (a.0 - b.0).abs().max((a.1 - b.1).abs()) as f32
}

/// Euclidean (L2) distance between two points.
#[inline]
pub fn euclidean(a: (i32, i32), b: (i32, i32)) -> f32 {
    let dx = (a.0 - b.0) as f32;
    let dy = (a.1 - b.1) as f32;
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        let a = (1, 2);
        let b = (4, -2);
        assert_eq!(manhattan(a, b), 7.0);
        assert_eq!(chebyshev(a, b), 4.0);
        assert_eq!(euclidean(a, b), 5.0);
        assert_eq!(manhattan(a, a), 0.0);
    }
}
