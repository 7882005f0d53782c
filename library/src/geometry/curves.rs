pub mod curves {
    // Exact integer oracles for the curves used by the summations and the tests.
    use std::cmp::Ordering;

    use crate::geometry::lattice_hull::lattice_hull::{
        Curvature, LatticeCurve, Monotonicity, Point, Shape,
    };
    use crate::isqrt::isqrt;
    use crate::math::stern_brocot::stern_brocot::Direction;
    use crate::wide::wide::{sqr, Wide};

    // y = n / x for x >= 1. Members lie strictly above the curve (x * y > n),
    // or on or above it when `closed` (x * y >= n).
    #[derive(Debug, Clone, Copy)]
    pub struct Hyperbola {
        pub n: i64,
        pub closed: bool,
    }

    impl Hyperbola {
        pub const SHAPE: Shape = Shape::new(Curvature::Convex, Monotonicity::Decreasing);

        pub fn new(n: i64, closed: bool) -> Self {
            Self { n, closed }
        }
    }

    impl LatticeCurve for Hyperbola {
        fn floor(&self, x: i64) -> i64 {
            self.n / x
        }

        // |f'(x)| = n / x^2
        fn cmp_slope(&self, x: i64, dir: Direction) -> Ordering {
            (self.n as Wide * dir.dx as Wide).cmp(&(dir.dy as Wide * sqr(x as Wide)))
        }

        fn contains(&self, p: Point) -> bool {
            let v = p.x as Wide * p.y as Wide;
            if self.closed {
                v >= self.n as Wide
            } else {
                v > self.n as Wide
            }
        }
    }

    // y = n / (n + 1 - x) for 1 <= x <= n, the mirror image of `Hyperbola`.
    #[derive(Debug, Clone, Copy)]
    pub struct ReflectedHyperbola {
        pub n: i64,
        pub closed: bool,
    }

    impl ReflectedHyperbola {
        pub const SHAPE: Shape = Shape::new(Curvature::Convex, Monotonicity::Increasing);

        pub fn new(n: i64, closed: bool) -> Self {
            Self { n, closed }
        }

        fn mirror(&self, x: i64) -> i64 {
            self.n + 1 - x
        }
    }

    impl LatticeCurve for ReflectedHyperbola {
        fn floor(&self, x: i64) -> i64 {
            self.n / self.mirror(x)
        }

        fn cmp_slope(&self, x: i64, dir: Direction) -> Ordering {
            let u = self.mirror(x) as Wide;
            (self.n as Wide * dir.dx as Wide).cmp(&(dir.dy as Wide * sqr(u)))
        }

        fn contains(&self, p: Point) -> bool {
            let v = self.mirror(p.x) as Wide * p.y as Wide;
            if self.closed {
                v >= self.n as Wide
            } else {
                v > self.n as Wide
            }
        }
    }

    // |f'| = |u| / sqrt(r - u^2) against dy / dx, squared to stay in integers.
    fn cmp_circle_slope(r: i64, u: i64, dir: Direction) -> Ordering {
        let rest = r as Wide - sqr(u as Wide);
        if rest <= 0 {
            return Ordering::Greater;
        }
        sqr(u.abs() as Wide * dir.dx as Wide).cmp(&(sqr(dir.dy as Wide) * rest))
    }

    fn circle_floor(r: i64, u: i64) -> i64 {
        let rest = r - u * u;
        if rest < 0 {
            -1
        } else {
            isqrt(rest)
        }
    }

    // Quarter circle y = sqrt(r - x^2); members are inside the disk.
    #[derive(Debug, Clone, Copy)]
    pub struct CircleArc {
        pub r: i64,
    }

    impl CircleArc {
        pub const SHAPE: Shape = Shape::new(Curvature::Concave, Monotonicity::Decreasing);

        pub fn new(r: i64) -> Self {
            Self { r }
        }
    }

    impl LatticeCurve for CircleArc {
        fn floor(&self, x: i64) -> i64 {
            circle_floor(self.r, x)
        }

        fn cmp_slope(&self, x: i64, dir: Direction) -> Ordering {
            cmp_circle_slope(self.r, x, dir)
        }

        fn contains(&self, p: Point) -> bool {
            sqr(p.x as Wide) + sqr(p.y as Wide) <= self.r as Wide
        }
    }

    // y = sqrt(r - (c - x)^2), increasing for x < c.
    #[derive(Debug, Clone, Copy)]
    pub struct ReflectedCircleArc {
        pub r: i64,
        pub c: i64,
    }

    impl ReflectedCircleArc {
        pub const SHAPE: Shape = Shape::new(Curvature::Concave, Monotonicity::Increasing);

        pub fn new(r: i64, c: i64) -> Self {
            Self { r, c }
        }
    }

    impl LatticeCurve for ReflectedCircleArc {
        fn floor(&self, x: i64) -> i64 {
            circle_floor(self.r, self.c - x)
        }

        fn cmp_slope(&self, x: i64, dir: Direction) -> Ordering {
            cmp_circle_slope(self.r, self.c - x, dir)
        }

        fn contains(&self, p: Point) -> bool {
            sqr((self.c - p.x) as Wide) + sqr(p.y as Wide) <= self.r as Wide
        }
    }
}

#[cfg(test)]
mod tests {
    use super::curves::*;
    use crate::geometry::lattice_hull::lattice_hull::{LatticeCurve, Point};
    use crate::math::stern_brocot::stern_brocot::Direction;
    use std::cmp::Ordering;

    #[test]
    fn floors_agree_with_membership() {
        let h = Hyperbola::new(97, false);
        for x in 1..=97 {
            let y = h.floor(x);
            assert!(!h.contains(Point::new(x, y)));
            assert!(h.contains(Point::new(x, y + 1)));
        }
        let c = CircleArc::new(101);
        for x in 0..=10 {
            let y = c.floor(x);
            assert!(c.contains(Point::new(x, y)));
            assert!(!c.contains(Point::new(x, y + 1)));
        }
    }

    #[test]
    fn slopes() {
        // |f'(10)| = 100 / 100 = 1
        let h = Hyperbola::new(100, false);
        assert_eq!(h.cmp_slope(10, Direction::new(1, 1)), Ordering::Equal);
        assert_eq!(h.cmp_slope(10, Direction::new(2, 1)), Ordering::Greater);
        assert_eq!(h.cmp_slope(5, Direction::new(1, 3)), Ordering::Greater);
        assert_eq!(h.cmp_slope(20, Direction::HORIZONTAL), Ordering::Greater);

        // |f'(3)| = 3 / 4 on the circle of radius 5
        let c = CircleArc::new(25);
        assert_eq!(c.cmp_slope(3, Direction::new(4, 3)), Ordering::Equal);
        assert_eq!(c.cmp_slope(3, Direction::new(1, 1)), Ordering::Less);
        assert_eq!(c.cmp_slope(5, Direction::new(1, 1000)), Ordering::Greater);

        let rc = ReflectedCircleArc::new(25, 5);
        assert_eq!(rc.cmp_slope(2, Direction::new(4, 3)), Ordering::Equal);

        let rh = ReflectedHyperbola::new(100, false);
        assert_eq!(rh.cmp_slope(91, Direction::new(1, 1)), Ordering::Equal);
    }
}
