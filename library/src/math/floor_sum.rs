pub mod floor_arith {
    use crate::wide::wide::{floor_div, s1, s2, sqr, Wide};

    // Aggregates of t(x) = floor((a * x + b) / c) over 0 <= x <= n:
    //   f = sum t(x), g = sum t(x)^2, h = sum x * t(x)
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct FloorSumNode {
        pub f: Wide,
        pub g: Wide,
        pub h: Wide,
    }

    // Requires n >= 0, a >= 0, b >= 0, c > 0.
    // Depth is O(log max(a, c)), the same as the euclidean algorithm.
    pub fn floor_sum_moments(n: Wide, a: Wide, b: Wide, c: Wide) -> FloorSumNode {
        debug_assert!(n >= 0 && a >= 0 && b >= 0 && c > 0);

        if n == 0 {
            let t = b / c;
            return FloorSumNode { f: t, g: sqr(t), h: 0 };
        }
        if a == 0 {
            let t = b / c;
            return FloorSumNode {
                f: (n + 1) * t,
                g: (n + 1) * sqr(t),
                h: s1(n) * t,
            };
        }
        if c == 1 {
            return FloorSumNode {
                f: a * s1(n) + b * (n + 1),
                g: sqr(a) * s2(n) + 2 * a * b * s1(n) + sqr(b) * (n + 1),
                h: a * s2(n) + b * s1(n),
            };
        }

        if a >= c || b >= c {
            let (t1, t2) = (a / c, b / c);
            let res = floor_sum_moments(n, a % c, b % c, c);
            let (s1, s2) = (s1(n), s2(n));
            return FloorSumNode {
                f: s1 * t1 + (n + 1) * t2 + res.f,
                g: sqr(t1) * s2
                    + (n + 1) * sqr(t2)
                    + 2 * t1 * t2 * s1
                    + 2 * t1 * res.h
                    + res.g
                    + 2 * t2 * res.f,
                h: s2 * t1 + s1 * t2 + res.h,
            };
        }

        // 0 <= a, b < c. Count lattice points by rows instead of columns:
        // t(x) > j  <=>  x > floor((c * j + c - b - 1) / a).
        let top = (n * a + b) / c;
        if top == 0 {
            return FloorSumNode::default();
        }
        let res = floor_sum_moments(top - 1, c, c - b - 1, a);
        let w = n * top;
        FloorSumNode {
            f: w - res.f,
            g: w * top - 2 * res.h - res.f,
            h: (n * (n + 1) * top - res.f - res.g) / 2,
        }
    }

    // Same aggregates with arbitrary signs of a, b and c != 0.
    pub fn floor_sum_moments_signed(n: Wide, mut a: Wide, mut b: Wide, mut c: Wide) -> FloorSumNode {
        assert!(n >= 0);
        assert!(c != 0);
        if c < 0 {
            a = -a;
            b = -b;
            c = -c;
        }
        if a < 0 {
            // x -> n - x
            let res = floor_sum_moments_signed(n, -a, a * n + b, c);
            return FloorSumNode {
                f: res.f,
                g: res.g,
                h: n * res.f - res.h,
            };
        }
        if b < 0 {
            let t = floor_div(b, c);
            let res = floor_sum_moments(n, a, b - t * c, c);
            return FloorSumNode {
                f: res.f + (n + 1) * t,
                g: res.g + 2 * t * res.f + (n + 1) * sqr(t),
                h: res.h + t * s1(n),
            };
        }
        floor_sum_moments(n, a, b, c)
    }

    // sum_{1 <= x <= n} floor((a * x + b) / c) * x
    // Descending lines (a < 0) are evaluated on the reflected range, as n * f - h.
    pub fn weighted_floor_sum(a: Wide, b: Wide, c: Wide, n: Wide) -> Wide {
        if n <= 0 {
            return 0;
        }
        floor_sum_moments_signed(n, a, b, c).h
    }
}
