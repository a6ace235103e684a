//! Input handling

pub mod module_args;
