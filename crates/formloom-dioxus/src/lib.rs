//! Dioxus views for the form builder: block picker, canvas, and the
//! per-block-type canvas and properties components.

pub mod ui;
