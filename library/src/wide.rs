pub mod wide {
    // Arithmetic on the 128-bit accumulator type.
    //
    // Every sum that reaches N^2 or N^3 scale goes through `Wide`. Inputs to
    // the hull search stay in i64; products of two i64 coordinates are
    // taken in `Wide` before comparison.
    use num_integer::Integer;

    pub type Wide = i128;

    // sum_{x=0}^{n} x
    pub fn s1(n: Wide) -> Wide {
        if n & 1 == 1 {
            (n + 1) / 2 * n
        } else {
            n / 2 * (n + 1)
        }
    }

    // sum_{x=0}^{n} x^2
    pub fn s2(n: Wide) -> Wide {
        let a = s1(n);
        let b = 2 * n + 1;
        if a % 3 == 0 {
            a / 3 * b
        } else {
            b / 3 * a
        }
    }

    pub fn sqr(x: Wide) -> Wide {
        x * x
    }

    pub fn floor_div(a: Wide, b: Wide) -> Wide {
        debug_assert!(b != 0);
        a.div_floor(&b)
    }

    // sum_{x=lo}^{hi} x, empty when hi < lo
    pub fn range_sum(lo: Wide, hi: Wide) -> Wide {
        if hi < lo {
            return 0;
        }
        s1(hi) - s1(lo - 1)
    }
}
