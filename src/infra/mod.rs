//! Side-effecting edges: the weather lookup and plan export.

pub mod export;
pub mod weather;
