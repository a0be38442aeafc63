pub mod employee;
pub mod filter;
