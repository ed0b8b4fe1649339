//! PDF processing UI module
//!
//! Simplified MVVM pattern implementation:
//! - view_model.rs: session state and the three workflow commands
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::ProcessPdfPage;
pub use view_model::ProcessPdfViewModel;
