//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod analysis;
pub mod chakras;
pub mod cycles;
pub mod footer;
pub mod header;
pub mod logs;
pub mod sidebar;
