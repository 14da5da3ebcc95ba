//! egui frontend for the material picker demo.

pub mod ui;
