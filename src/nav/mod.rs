//! Navigation between the home, menu and content pages.
//!
//! [`ApplicationState`] is the single source of truth for the UI;
//! [`NavigationController`] is the only thing that mutates it.

pub mod controller;
pub mod state;

pub use controller::{NavigationController, THEME_PICKER_ANNOUNCEMENT};
pub use state::{ApplicationState, Page};
