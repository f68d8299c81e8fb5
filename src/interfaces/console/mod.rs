//! Interactive menu driving an [`ApartmentRegistry`] over any line-based
//! input and text output.
//!
//! [`ApartmentRegistry`]: crate::application::registry::ApartmentRegistry

pub mod menu;
pub mod session;

pub use menu::MenuCommand;
pub use session::ConsoleSession;
