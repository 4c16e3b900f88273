// src/gui/router.rs
use crate::core::source::InputMode::{self, *};
use super::pages::{self, Page};

pub static PAGES: &[&'static dyn Page] = &[
    &pages::manual::PAGE,
    &pages::file::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

pub fn page_for(mode: InputMode) -> &'static dyn Page {
    match mode {
        Manual => &pages::manual::PAGE,
        File   => &pages::file::PAGE,
    }
}
