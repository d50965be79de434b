//! Application Layer

pub mod forms;
