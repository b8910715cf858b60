//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The site has a single page; it owns section ordering and delegates
//! rendering details to `components`.

pub mod home;
