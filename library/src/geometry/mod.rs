pub mod curves;
pub mod lattice_hull;
