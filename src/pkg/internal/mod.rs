pub mod adaptors;
pub mod filter;
