// src/core/editor.rs
//
// Manually entered rows. Never empty: starts with one blank row and the last
// row can't be removed. No validation here, that happens at submit.

use super::job::{JobField, JobInput};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobList {
    rows: Vec<JobInput>,
}

impl Default for JobList {
    fn default() -> Self { Self::new() }
}

impl JobList {
    pub fn new() -> Self {
        Self { rows: vec![JobInput::default()] }
    }

    #[inline] pub fn len(&self) -> usize { self.rows.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.rows.is_empty() }
    #[inline] pub fn rows(&self) -> &[JobInput] { &self.rows }
    #[inline] pub fn get(&self, index: usize) -> Option<&JobInput> { self.rows.get(index) }

    /// Delete buttons are disabled while this is false.
    #[inline]
    pub fn can_remove(&self) -> bool { self.rows.len() > 1 }

    pub fn add(&mut self) {
        self.rows.push(JobInput::default());
    }

    /// Returns whether a row was removed.
    pub fn remove(&mut self, index: usize) -> bool {
        if !self.can_remove() || index >= self.rows.len() {
            logd!("Editor: remove({}) refused, rows={}", index, self.rows.len());
            return false;
        }
        self.rows.remove(index);
        true
    }

    /// Returns whether `index` existed.
    pub fn update(&mut self, index: usize, field: JobField, value: impl Into<String>) -> bool {
        match self.rows.get_mut(index) {
            Some(row) => {
                row.set(field, value.into());
                true
            }
            None => false,
        }
    }
}
