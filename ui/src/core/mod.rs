//! Platform-agnostic state: preferences, menu flags and site profile.

pub mod menu;
pub mod site;
pub mod storage;
pub mod theme;
