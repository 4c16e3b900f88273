// src/core/mod.rs

pub mod controller;
pub mod editor;
pub mod job;
pub mod parse;
pub mod source;
pub mod stopwatch;

pub use controller::{Completion, Controller, Phase, SessionId, SubmitError, SubmitTicket, SwitchError};
pub use editor::JobList;
pub use job::{JobField, JobInput};
pub use source::{FileJobs, InputMode, JobSource};
