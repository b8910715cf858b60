//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render one page section each while reading/writing shared
//! state from Leptos context providers.

pub mod contact_form;
pub mod hero;
pub mod mobile_nav;
pub mod project_gallery;
pub mod site_footer;
pub mod site_header;
