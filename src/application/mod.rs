//! Application layer containing the registry operations.
//!
//! `ApartmentRegistry` owns every apartment record and the selection set.
//! Callers (the console, the seed importer) go through it for all reads and
//! mutations.

pub mod registry;
