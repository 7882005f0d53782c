pub mod floor_sum;
pub mod stern_brocot;
