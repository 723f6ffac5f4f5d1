//! Game implementations.

pub mod escape_room;
