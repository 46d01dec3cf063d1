//! Small utilities shared by command-line entry points and services:
//! environment-variable driven configuration overrides and tracing
//! initialization.

pub mod env;
pub mod keyvalue;
