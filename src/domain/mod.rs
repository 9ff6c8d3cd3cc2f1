pub mod branch;
pub mod ticket;
