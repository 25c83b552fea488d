// src/lib.rs

pub mod document;
pub mod editor;
pub mod error;
pub mod generator;
pub mod map;
pub mod ui;
