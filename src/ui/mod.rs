//! Reusable UI widgets

pub mod components;
