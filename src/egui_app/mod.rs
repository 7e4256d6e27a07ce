//! Tab state, view shaping and the egui front end.

pub mod controller;
pub mod state;
pub mod ui;
pub mod view_model;
