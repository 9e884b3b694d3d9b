//! Power management related data structures
pub mod soft_off;
