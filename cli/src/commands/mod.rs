pub mod categories;
mod common;
pub mod filter;
pub mod render;
