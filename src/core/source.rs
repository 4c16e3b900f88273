// src/core/source.rs
//
// The active input. Exactly one of manual rows or file rows exists at a
// time; leaving a mode drops its rows, so the inactive source can't be sent.

use super::editor::JobList;
use super::job::{self, JobInput};
use super::parse;
use crate::config::consts::{DEFAULT_MANUAL_FILE, DEFAULT_UPLOAD_FILE, MSG_EMPTY_FILE, MSG_FILL_ROW};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputMode {
    Manual,
    File,
}

impl InputMode {
    pub const ALL: [InputMode; 2] = [InputMode::Manual, InputMode::File];

    pub fn title(self) -> &'static str {
        match self {
            InputMode::Manual => "Manual entry",
            InputMode::File => "From file",
        }
    }

    /// Used when the server response carries no filename.
    pub fn default_filename(self) -> &'static str {
        match self {
            InputMode::Manual => DEFAULT_MANUAL_FILE,
            InputMode::File => DEFAULT_UPLOAD_FILE,
        }
    }

    pub fn empty_message(self) -> &'static str {
        match self {
            InputMode::Manual => MSG_FILL_ROW,
            InputMode::File => MSG_EMPTY_FILE,
        }
    }
}

/// Rows parsed from a loaded text file. Read-only once loaded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FileJobs {
    pub name: Option<String>,
    pub jobs: Vec<JobInput>,
    pub rejected_lines: Vec<usize>,
}

impl FileJobs {
    pub fn from_text(name: impl Into<String>, text: &str) -> Self {
        let report = parse::parse_jobs_report(text);
        Self {
            name: Some(name.into()),
            jobs: report.jobs,
            rejected_lines: report.rejected_lines,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JobSource {
    Manual(JobList),
    File(FileJobs),
}

impl Default for JobSource {
    fn default() -> Self { JobSource::Manual(JobList::new()) }
}

impl JobSource {
    pub fn fresh(mode: InputMode) -> Self {
        match mode {
            InputMode::Manual => JobSource::Manual(JobList::new()),
            InputMode::File => JobSource::File(FileJobs::default()),
        }
    }

    pub fn mode(&self) -> InputMode {
        match self {
            JobSource::Manual(_) => InputMode::Manual,
            JobSource::File(_) => InputMode::File,
        }
    }

    pub fn jobs(&self) -> &[JobInput] {
        match self {
            JobSource::Manual(list) => list.rows(),
            JobSource::File(file) => &file.jobs,
        }
    }

    /// What a submit would send right now.
    pub fn submittable(&self) -> Vec<JobInput> {
        job::submittable(self.jobs())
    }

    pub fn manual(&self) -> Option<&JobList> {
        match self {
            JobSource::Manual(list) => Some(list),
            JobSource::File(_) => None,
        }
    }

    pub fn manual_mut(&mut self) -> Option<&mut JobList> {
        match self {
            JobSource::Manual(list) => Some(list),
            JobSource::File(_) => None,
        }
    }

    pub fn file(&self) -> Option<&FileJobs> {
        match self {
            JobSource::File(file) => Some(file),
            JobSource::Manual(_) => None,
        }
    }
}
