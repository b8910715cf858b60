//! Static page content.
//!
//! Everything here is fixed at compile time; components read it and never
//! mutate it.

pub mod profile;
pub mod projects;
