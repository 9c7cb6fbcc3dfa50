//! Page widget state.
//!
//! Plain per-instance state for the interactive page components. Rendering
//! and animation are left to the front end.

pub mod accordion;
pub mod tabs;
pub mod text_loop;

pub use accordion::{Accordion, FaqItem, Key};
pub use tabs::{Direction, Feature, Product, ProductTabs, TransitionPanel};
pub use text_loop::{TextLoop, DEFAULT_INTERVAL};
