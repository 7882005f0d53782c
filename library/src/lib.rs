pub mod error;
pub mod geometry;
pub mod io;
pub mod isqrt;
pub mod math;
pub mod summatory;
pub mod wide;

pub use error::{Error, Result};
pub use geometry::lattice_hull::lattice_hull::{
    build_hull, LatticeCurve, LatticeHull, Point, Shape,
};
pub use summatory::summatory::{compute, reference, Target};
pub use wide::wide::Wide;
