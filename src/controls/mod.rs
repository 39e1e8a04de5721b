//! Page Controls
//!
//! Browser event wiring for the host page's DOM hooks. A missing hook only
//! disables the feature that needs it.

mod hooks;
mod search;
mod theme;
mod lightbox;
mod footer;

pub use hooks::*;
pub use search::*;
pub use theme::*;
pub use lightbox::*;
pub use footer::*;
