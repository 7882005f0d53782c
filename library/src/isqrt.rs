use num_integer::Roots;

pub fn isqrt(x: i64) -> i64 {
    debug_assert!(0 <= x);
    x.sqrt()
}

pub fn icbrt(x: i64) -> i64 {
    debug_assert!(0 <= x);
    x.cbrt()
}
