//! ZMK Lens Library
//!
//! This library provides core functionality for the ZMK Lens tool:
//! parsing ZMK physical layout and keymap sources, resolving binding
//! expressions to display legends and key codes, and compiling renderable
//! keyboard layout models.

// Module declarations
pub mod bindings;
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod parser;
pub mod services;
