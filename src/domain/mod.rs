//! Domain types: apartment records and the selection set.

pub mod apartment;
pub mod selection;
