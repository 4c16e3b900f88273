// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{submit,stop,poll,...}.

mod load;    // src/gui/actions/load.rs
mod save;    // src/gui/actions/save.rs
mod submit;  // src/gui/actions/submit.rs

pub use load::{load_dropped, load_file_dialog, load_path};
pub use save::save_result;
pub use submit::{poll, stop, submit};
