use glam::IVec2;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: IVec2, b: IVec2) -> u32 {
    (a - b).abs().element_sum() as u32
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: IVec2, b: IVec2) -> u32 {
    (a - b).abs().max_element() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances_are_symmetric() {
        let a = IVec2::new(1, 5);
        let b = IVec2::new(4, 1);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(manhattan(b, a), 7);
        assert_eq!(chebyshev(a, b), 4);
        assert_eq!(manhattan(a, a), 0);
    }
}
