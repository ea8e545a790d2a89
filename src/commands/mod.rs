pub mod calculate;
pub mod check;
pub mod smoke;
pub mod versions;
