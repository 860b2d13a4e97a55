pub mod entities;
pub mod filter;
pub mod validation;
