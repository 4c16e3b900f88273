// src/lib.rs
// #![allow(dead_code)]
// #![allow(unused)]

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;

pub mod file;
pub mod net;
pub mod progress;
pub mod worker;

pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;
