//! egui front end: view state, the controller that owns it, and rendering.

pub mod controller;
pub mod state;
pub mod ui;
