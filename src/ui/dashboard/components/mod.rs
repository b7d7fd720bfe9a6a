//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod activity;
pub mod footer;
pub mod header;
pub mod loading;
pub mod quick_stats;
pub mod regions;
pub mod stat_cards;
pub mod subjects;
