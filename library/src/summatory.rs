pub mod summatory {
    // Divisor-type summatory functions in O(N^(1/3) log N).
    //
    // Every quantity is assembled from the columns x > sqrt(N) of the region
    // under y = N/x. Columns in [sqrt(N), N^(2/3)) are read off the lattice
    // hull of the region above the hyperbola, the remaining ones have few
    // distinct heights and are summed per block.
    use std::fmt;
    use std::ops::{Add, AddAssign};

    use crate::geometry::curves::curves::Hyperbola;
    use crate::geometry::lattice_hull::lattice_hull::{build_hull, Point};
    use crate::isqrt::{icbrt, isqrt};
    use crate::math::floor_sum::floor_arith::floor_sum_moments;
    use crate::wide::wide::{range_sum, s1, sqr, Wide};

    // Below this the hull domain is empty; sum directly.
    pub const SMALL_THRESHOLD: i64 = 12;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
    pub enum Target {
        // sum floor(N/i) = sum d(i)
        DivisorCount,
        // sum i * floor(N/i) = sum sigma(i)
        DivisorSum,
        // sum (sigma(i) - i)
        AliquotSum,
        // sum floor(N/i)^2
        SquaredQuotient,
    }

    impl Target {
        pub const ALL: [Target; 4] = [
            Target::DivisorCount,
            Target::DivisorSum,
            Target::AliquotSum,
            Target::SquaredQuotient,
        ];
    }

    impl fmt::Display for Target {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let name = match self {
                Target::DivisorCount => "divisor-count",
                Target::DivisorSum => "divisor-sum",
                Target::AliquotSum => "aliquot-sum",
                Target::SquaredQuotient => "squared-quotient",
            };
            f.write_str(name)
        }
    }

    // Aggregates of the column heights q(x) over a set of columns.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct ColumnMoments {
        // sum q
        pub count: Wide,
        // sum q^2
        pub square: Wide,
        // sum x * q
        pub weighted: Wide,
    }

    impl ColumnMoments {
        // Columns lo..=hi, all of height q.
        pub fn block(lo: Wide, hi: Wide, q: Wide) -> Self {
            let len = hi - lo + 1;
            Self {
                count: q * len,
                square: sqr(q) * len,
                weighted: q * range_sum(lo, hi),
            }
        }

        // Columns x..x+dx strictly under the hull edge from (x, y) to (x + dx, y - dy).
        // Heights are (y - 1) - floor(dy * t / dx) for t in 0..dx.
        pub fn edge(x: Wide, y: Wide, dx: Wide, dy: Wide) -> Self {
            debug_assert!(dx > 0 && dy >= 0);
            let node = floor_sum_moments(dx - 1, dy, 0, dx);
            let top = y - 1;
            Self {
                count: dx * top - node.f,
                square: dx * sqr(top) - 2 * top * node.f + node.g,
                weighted: top * (dx * x + s1(dx - 1)) - x * node.f - node.h,
            }
        }
    }

    impl Add for ColumnMoments {
        type Output = Self;

        fn add(self, rhs: Self) -> Self {
            Self {
                count: self.count + rhs.count,
                square: self.square + rhs.square,
                weighted: self.weighted + rhs.weighted,
            }
        }
    }

    impl AddAssign for ColumnMoments {
        fn add_assign(&mut self, rhs: Self) {
            *self = *self + rhs;
        }
    }

    // Columns lo..=n of floor(n/x), one block per distinct quotient.
    pub fn quotient_blocks(n: i64, lo: i64) -> ColumnMoments {
        let mut acc = ColumnMoments::default();
        let mut x = lo.max(1);
        while x <= n {
            let q = n / x;
            let hi = n / q;
            acc += ColumnMoments::block(x as Wide, hi as Wide, q as Wide);
            if hi == n {
                break;
            }
            x = hi + 1;
        }
        acc
    }

    // Heights floor(n/x) over the columns sqrt(n) < x <= n.
    pub fn upper_columns(n: i64) -> ColumnMoments {
        debug_assert!(n >= 1);
        let s = isqrt(n);
        let c = icbrt(n);
        let end = c * c;
        let lo = s + 1;
        if end <= lo {
            return quotient_blocks(n, lo);
        }

        let curve = Hyperbola::new(n, false);
        let start = Point::new(lo, n / lo + 1);
        let hull = build_hull(&curve, Hyperbola::SHAPE, start, end);
        log::debug!(
            "n = {}: hull over [{}, {}) has {} vertices",
            n,
            lo,
            end,
            hull.vertices.len()
        );

        let mut acc = ColumnMoments::default();
        for w in hull.vertices.windows(2) {
            let (p, q) = (w[0], w[1]);
            log::trace!("edge {:?} -> {:?}", p, q);
            acc += ColumnMoments::edge(
                p.x as Wide,
                p.y as Wide,
                (q.x - p.x) as Wide,
                (p.y - q.y) as Wide,
            );
        }
        let tail = hull.vertices.last().map_or(lo, |p| p.x);
        acc + quotient_blocks(n, tail)
    }

    fn term(target: Target, n: i64, i: i64) -> Wide {
        let (i, q) = (i as Wide, (n / i) as Wide);
        match target {
            Target::DivisorCount => q,
            Target::DivisorSum => i * q,
            Target::AliquotSum => i * q - i,
            Target::SquaredQuotient => sqr(q),
        }
    }

    pub fn brute_force(target: Target, n: i64) -> Wide {
        debug_assert!(n >= 0);
        (1..=n).map(|i| term(target, n, i)).sum()
    }

    pub fn compute(target: Target, n: i64) -> Wide {
        debug_assert!(n >= 0);
        if n < SMALL_THRESHOLD {
            return brute_force(target, n);
        }

        let s = isqrt(n) as Wide;
        let m = upper_columns(n);
        match target {
            Target::DivisorCount => sqr(s) + 2 * m.count,
            Target::DivisorSum => divisor_sum(s, m),
            Target::AliquotSum => divisor_sum(s, m) - s1(n as Wide),
            Target::SquaredQuotient => s * sqr(s) + m.square + 2 * m.weighted - m.count,
        }
    }

    fn divisor_sum(s: Wide, m: ColumnMoments) -> Wide {
        s * s1(s) + m.weighted + (m.square + m.count) / 2
    }

    // O(sqrt(N)) evaluation over every block of constant floor(N/x).
    pub fn reference(target: Target, n: i64) -> Wide {
        debug_assert!(n >= 0);
        let m = quotient_blocks(n, 1);
        match target {
            Target::DivisorCount => m.count,
            Target::DivisorSum => m.weighted,
            Target::AliquotSum => m.weighted - s1(n as Wide),
            Target::SquaredQuotient => m.square,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::summatory::*;
    use crate::wide::wide::{s1, sqr, Wide};
    use rand::{rngs::StdRng, Rng, SeedableRng};

    #[test]
    fn boundary_values() {
        assert_eq!(compute(Target::DivisorCount, 0), 0);
        assert_eq!(compute(Target::DivisorCount, 1), 1);
        assert_eq!(compute(Target::DivisorCount, 10), 27);
        assert_eq!(compute(Target::DivisorCount, 100), 482);
        assert_eq!(compute(Target::DivisorSum, 10), 87);
        assert_eq!(compute(Target::AliquotSum, 10), 32);
        assert_eq!(compute(Target::SquaredQuotient, 10), 147);
    }

    #[test]
    fn divisor_count_small() {
        for n in 1..=10_000 {
            let expected: Wide = (1..=n).map(|i| (n / i) as Wide).sum();
            assert_eq!(compute(Target::DivisorCount, n), expected, "{}", n);
        }
    }

    #[test]
    fn all_targets_against_brute_force() {
        for target in Target::ALL {
            for n in 0..=2_000 {
                assert_eq!(compute(target, n), brute_force(target, n), "{:?}", (target, n));
                assert_eq!(reference(target, n), brute_force(target, n), "{:?}", (target, n));
            }
        }
    }

    #[test]
    fn large_against_reference() {
        let mut rng = StdRng::seed_from_u64(42);
        let samples = [1_000_000_000, 1_000_000_000_000, 999_999_999_989]
            .into_iter()
            .chain((0..8).map(|_| rng.gen_range(1_000..100_000_000_000)));
        for n in samples {
            for target in Target::ALL {
                assert_eq!(compute(target, n), reference(target, n), "{:?}", (target, n));
            }
        }
    }

    #[test]
    fn known_divisor_counts() {
        // OEIS A006218
        assert_eq!(compute(Target::DivisorCount, 1_000_000), 13_970_034);
        assert_eq!(compute(Target::DivisorCount, 1_000_000_000), 20_877_697_634);
    }

    #[test]
    fn last_block_at_i64_max() {
        let n = i64::MAX;
        for lo in [n, n - 1, n - 1_000, n / 2 + 1] {
            let expected = ColumnMoments::block(lo as Wide, n as Wide, 1);
            assert_eq!(quotient_blocks(n, lo), expected, "{}", lo);
        }
        let lo = n / 3 + 1;
        let expected = ColumnMoments::block(lo as Wide, (n / 2) as Wide, 2)
            + ColumnMoments::block((n / 2 + 1) as Wide, n as Wide, 1);
        assert_eq!(quotient_blocks(n, lo), expected);
    }

    #[test]
    fn largest_input() {
        let n = i64::MAX;
        let count = compute(Target::DivisorCount, n);
        let sum = compute(Target::DivisorSum, n);
        // isqrt(n) = 3037000499 is odd and the rest of the count is doubled
        assert_eq!(count % 2, 1);
        assert!(count > n as Wide);
        assert_eq!(compute(Target::AliquotSum, n), sum - s1(n as Wide));
        assert!(compute(Target::SquaredQuotient, n) > sqr(n as Wide));
        assert_eq!(compute(Target::DivisorCount, n), count);
    }

    #[test]
    #[ignore = "O(sqrt(N)) reference over 6e9 blocks"]
    fn largest_input_against_reference() {
        for target in Target::ALL {
            assert_eq!(compute(target, i64::MAX), reference(target, i64::MAX), "{:?}", target);
        }
    }

    #[test]
    fn deterministic() {
        let n = 123_456_789_012;
        let first = compute(Target::DivisorSum, n);
        for _ in 0..3 {
            assert_eq!(compute(Target::DivisorSum, n), first);
        }
    }

    #[test]
    fn edge_matches_columns() {
        // heights under the segment (x, y) -> (x + dx, y - dy)
        for dx in 1..20 {
            for dy in 0..20 {
                let (x, y) = (7, 50);
                let mut expected = ColumnMoments::default();
                for t in 0..dx {
                    let q = y - 1 - dy * t / dx;
                    expected += ColumnMoments::block(x + t, x + t, q);
                }
                assert_eq!(ColumnMoments::edge(x, y, dx, dy), expected, "{:?}", (dx, dy));
            }
        }
    }

    #[test]
    fn target_names() {
        assert_eq!(Target::AliquotSum.to_string(), "aliquot-sum");
        assert_eq!(Target::ALL.len(), 4);
    }
}
