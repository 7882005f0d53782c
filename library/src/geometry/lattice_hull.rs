pub mod lattice_hull {
    // Convex hull of the lattice points bounded by a monotone curve, found by
    // walking the Stern-Brocot tree instead of probing every column.
    //
    // The member region of a convex curve lies above it, the member region of
    // a concave curve lies below it. In both cases the region is convex, and
    // the hull chain facing the curve is returned, left to right.
    use std::cmp::Ordering;

    use crate::math::stern_brocot::stern_brocot::{partition_point_unbounded, Direction};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
    pub struct Point {
        pub x: i64,
        pub y: i64,
    }

    impl Point {
        pub fn new(x: i64, y: i64) -> Self {
            Self { x, y }
        }
    }

    impl From<(i64, i64)> for Point {
        fn from((x, y): (i64, i64)) -> Self {
            Self { x, y }
        }
    }

    // Oracle access to the curve. All three must agree exactly at lattice points.
    pub trait LatticeCurve {
        // floor(f(x))
        fn floor(&self, x: i64) -> i64;

        // Compare |f'(x)| with dir.dy / dir.dx, where dir.dx > 0.
        fn cmp_slope(&self, x: i64, dir: Direction) -> Ordering;

        fn contains(&self, p: Point) -> bool;
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Curvature {
        Convex,
        Concave,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Monotonicity {
        Increasing,
        Decreasing,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Shape {
        pub curvature: Curvature,
        pub monotonicity: Monotonicity,
    }

    impl Shape {
        pub const fn new(curvature: Curvature, monotonicity: Monotonicity) -> Self {
            Self {
                curvature,
                monotonicity,
            }
        }

        pub fn sign(self) -> i64 {
            match self.monotonicity {
                Monotonicity::Increasing => 1,
                Monotonicity::Decreasing => -1,
            }
        }

        // |f'| decreases along the domain. Shallow steps are then always
        // feasible from a hull vertex, otherwise steep ones are.
        pub fn flattening(self) -> bool {
            matches!(
                (self.curvature, self.monotonicity),
                (Curvature::Convex, Monotonicity::Decreasing)
                    | (Curvature::Concave, Monotonicity::Increasing)
            )
        }

        // Vertical direction from the curve into the member region.
        fn inward(self) -> i64 {
            match self.curvature {
                Curvature::Convex => 1,
                Curvature::Concave => -1,
            }
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq, Default)]
    pub struct LatticeHull {
        pub vertices: Vec<Point>,
        // Direction of the first edge, in lowest terms.
        pub initial_slope: Option<Direction>,
    }

    fn settle<C: LatticeCurve + ?Sized>(curve: &C, shape: Shape, mut p: Point) -> Point {
        let inward = shape.inward();
        while !curve.contains(p) {
            p.y += inward;
        }
        while curve.contains(Point::new(p.x, p.y - inward)) {
            p.y -= inward;
        }
        p
    }

    // The member of column x closest to the curve.
    pub fn column_extreme<C: LatticeCurve + ?Sized>(curve: &C, shape: Shape, x: i64) -> i64 {
        settle(curve, shape, Point::new(x, curve.floor(x))).y
    }

    // Hull vertices over the columns [start.x, end).
    //
    // Preconditions (unchecked): the curve is strictly monotone and wholly
    // convex or wholly concave on the domain, as described by `shape`, and
    // start lies in the column of the first hull vertex.
    pub fn build_hull<C: LatticeCurve + ?Sized>(
        curve: &C,
        shape: Shape,
        start: Point,
        end: i64,
    ) -> LatticeHull {
        debug_assert!(start.x < end);

        let sign = shape.sign();
        let flattening = shape.flattening();

        let mut p = settle(curve, shape, start);
        let mut vertices = vec![p];
        if p.x + 1 >= end {
            return LatticeHull {
                vertices,
                initial_slope: None,
            };
        }

        // k steps along dir, or None once the domain is left.
        let step = |p: Point, dir: Direction, k: i64| -> Option<Point> {
            let x = p.x.checked_add(dir.dx.checked_mul(k)?)?;
            if x >= end {
                return None;
            }
            let y = p.y.checked_add(dir.dy.checked_mul(k)?.checked_mul(sign)?)?;
            Some(Point::new(x, y))
        };
        let can_step = |p: Point, dir: Direction| step(p, dir, 1).map_or(false, |q| curve.contains(q));

        // No direction strictly between `mid` and `feasible` can be feasible
        // once the curve at the tested column bends past the feasible slope.
        let exhausted = |x: i64, feasible: Direction| {
            let ord = if feasible.is_vertical() {
                Ordering::Less
            } else {
                curve.cmp_slope(x, feasible)
            };
            if flattening {
                ord != Ordering::Greater
            } else {
                ord != Ordering::Less
            }
        };

        let refine = |stack: &mut Vec<Direction>,
                      p: Point,
                      mut feasible: Direction,
                      mut infeasible: Direction| {
            loop {
                debug_assert_eq!(feasible.det(infeasible).abs(), 1);
                let mid = feasible.mediant(infeasible);
                let Some(q) = step(p, mid, 1) else {
                    break;
                };
                if curve.contains(q) {
                    feasible = mid;
                    stack.push(mid);
                } else {
                    if exhausted(q.x, feasible) {
                        break;
                    }
                    infeasible = mid;
                }
            }
        };

        let mut stack = Vec::new();
        if flattening {
            stack.push(Direction::HORIZONTAL);
            refine(&mut stack, p, Direction::HORIZONTAL, Direction::VERTICAL);
        } else {
            stack.push(Direction::VERTICAL);
            if can_step(p, Direction::HORIZONTAL) {
                stack.push(Direction::HORIZONTAL);
            } else {
                refine(&mut stack, p, Direction::VERTICAL, Direction::HORIZONTAL);
            }
        }
        let initial_slope = stack.last().copied();

        while let Some(dir) = stack.pop() {
            if dir.is_vertical() {
                break;
            }

            // Membership along a ray is an interval, so the run can be galloped.
            let run = partition_point_unbounded(|k| {
                step(p, dir, k + 1).map_or(false, |q| curve.contains(q))
            });
            if run > 0 {
                if let Some(q) = step(p, dir, run) {
                    p = q;
                    if p.y >= 0 {
                        vertices.push(p);
                    }
                }
            }

            let mut infeasible = dir;
            let mut bracket = None;
            while let Some(&top) = stack.last() {
                match step(p, top, 1) {
                    Some(q) if !curve.contains(q) => {
                        stack.pop();
                        infeasible = top;
                    }
                    _ => {
                        bracket = Some(top);
                        break;
                    }
                }
            }
            let Some(feasible) = bracket else {
                break;
            };
            refine(&mut stack, p, feasible, infeasible);
        }

        log::trace!(
            "hull over [{}, {}): {} vertices, {:?}",
            start.x,
            end,
            vertices.len(),
            shape
        );

        let initial_slope = if vertices.len() >= 2 {
            initial_slope
        } else {
            None
        };
        LatticeHull {
            vertices,
            initial_slope,
        }
    }

    // Gift-wrapping over every column extreme. O(width * hull size).
    pub fn brute_force_hull<C: LatticeCurve + ?Sized>(
        curve: &C,
        shape: Shape,
        start_x: i64,
        end: i64,
    ) -> LatticeHull {
        assert!(start_x < end);
        let points: Vec<Point> = (start_x..end)
            .map(|x| Point::new(x, column_extreme(curve, shape, x)))
            .collect();

        // lower chain for convex curves, upper chain for concave ones
        let prefer = match shape.curvature {
            Curvature::Convex => Ordering::Less,
            Curvature::Concave => Ordering::Greater,
        };

        let mut vertices = vec![points[0]];
        let mut now = 0;
        loop {
            let p = points[now];
            let mut next: Option<usize> = None;
            for i in now + 1..points.len() {
                let q = points[i];
                let better = match next {
                    None => true,
                    Some(j) => {
                        let r = points[j];
                        let lhs = (q.y - p.y) as i128 * (r.x - p.x) as i128;
                        let rhs = (r.y - p.y) as i128 * (q.x - p.x) as i128;
                        let ord = lhs.cmp(&rhs);
                        ord == prefer || ord == Ordering::Equal
                    }
                };
                if better {
                    next = Some(i);
                }
            }
            let Some(next) = next else {
                break;
            };
            vertices.push(points[next]);
            now = next;
        }

        let initial_slope = match vertices.as_slice() {
            [a, b, ..] => Some(Direction::reduced(b.x - a.x, b.y - a.y)),
            _ => None,
        };
        LatticeHull {
            vertices,
            initial_slope,
        }
    }
}
