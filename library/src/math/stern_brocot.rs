pub mod stern_brocot {
    use std::cmp::Ordering;

    use crate::wide::wide::Wide;

    pub type T = i64;

    // A lattice step (dx, dy) with dx, dy >= 0, read as the slope dy/dx.
    // The vertical step (0, 1) stands for an infinite slope.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Direction {
        pub dx: T,
        pub dy: T,
    }

    impl Direction {
        pub const HORIZONTAL: Self = Self { dx: 1, dy: 0 };
        pub const VERTICAL: Self = Self { dx: 0, dy: 1 };

        pub fn new(dx: T, dy: T) -> Self {
            debug_assert!(dx >= 0 && dy >= 0);
            Self { dx, dy }
        }

        // Lowest-terms representative of the slope |dy|/|dx|.
        pub fn reduced(dx: T, dy: T) -> Self {
            let (dx, dy) = (dx.abs(), dy.abs());
            let g = num_integer::gcd(dx, dy);
            if g == 0 {
                return Self { dx: 0, dy: 0 };
            }
            Self::new(dx / g, dy / g)
        }

        pub fn mediant(self, other: Self) -> Self {
            Self::new(self.dx + other.dx, self.dy + other.dy)
        }

        pub fn det(self, other: Self) -> Wide {
            self.dx as Wide * other.dy as Wide - self.dy as Wide * other.dx as Wide
        }

        pub fn is_vertical(self) -> bool {
            self.dx == 0
        }

        // Compare slopes dy/dx; the vertical direction is larger than anything else.
        pub fn cmp_slope(self, other: Self) -> Ordering {
            (self.dy as Wide * other.dx as Wide).cmp(&(other.dy as Wide * self.dx as Wide))
        }
    }

    // Smallest k >= 0 such that pred(k) is false, assuming pred is monotone
    // (true on a prefix). Exponential search followed by binary search.
    pub fn partition_point_unbounded(mut pred: impl FnMut(T) -> bool) -> T {
        let mut left = 0;
        let mut right = 0;
        while pred(right) {
            left = right;
            right = right * 2 + 1;
            if right == T::MAX {
                return right;
            }
        }

        while left < right {
            let mid = left + (right - left) / 2;
            if pred(mid) {
                left = mid + 1;
            } else {
                right = mid;
            }
        }

        right
    }
}
