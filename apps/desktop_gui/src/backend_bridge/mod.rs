//! Backend side of the GUI: command queue intake and the worker runtime.

pub mod commands;
pub mod runtime;
