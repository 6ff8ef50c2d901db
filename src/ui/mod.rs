//! UI module - egui rendering of the scene and location view models

pub mod components;
pub mod map_view;
