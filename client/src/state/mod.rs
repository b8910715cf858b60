//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`theme`, `nav`, `contact`) so each component
//! depends on one small model. Every model is plain data mutated through
//! methods, wrapped in an `RwSignal` by the root `App`.

pub mod contact;
pub mod nav;
pub mod settings;
pub mod theme;
