// src/file.rs
//
// Local file boundaries: reading job lists in, writing result spreadsheets out.

use std::{
    fs,
    path::{Path, PathBuf},
};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::config::consts::XLSX_MIME;
use crate::error::{ArtifactError, LoadError};

/// Decoded result spreadsheet, held in memory until saved or discarded.
#[derive(Clone, PartialEq, Eq)]
pub struct Artifact {
    filename: String,
    bytes: Vec<u8>,
}

impl std::fmt::Debug for Artifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Artifact")
            .field("filename", &self.filename)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl Artifact {
    /// `filename` comes from the server; only its last path component is kept.
    /// Blank or unusable names fall back to `default_name`.
    pub fn from_b64(filename: &str, b64: &str, default_name: &str) -> Result<Self, ArtifactError> {
        // Tolerate line-wrapped base64.
        let compact: String = b64.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        let bytes = STANDARD.decode(compact.as_bytes())?;
        Ok(Self { filename: safe_filename(filename, default_name), bytes })
    }

    #[inline] pub fn filename(&self) -> &str { &self.filename }
    #[inline] pub fn bytes(&self) -> &[u8] { &self.bytes }
    #[inline] pub fn len(&self) -> usize { self.bytes.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.bytes.is_empty() }
    #[inline] pub fn mime(&self) -> &'static str { XLSX_MIME }

    /// Write to an exact path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<PathBuf, ArtifactError> {
        let wrap = |source| ArtifactError::Write { path: path.to_path_buf(), source };
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                ensure_directory(parent).map_err(wrap)?;
            }
        }
        fs::write(path, &self.bytes).map_err(wrap)?;
        logf!("File: Saved {} ({}B)", path.display(), self.bytes.len());
        Ok(path.to_path_buf())
    }

    /// Write into `dir` under the artifact's own filename.
    pub fn save_in_dir(&self, dir: &Path) -> Result<PathBuf, ArtifactError> {
        self.save_to(&dir.join(&self.filename))
    }
}

/// Last path component of `name`, trimmed; `default_name` if nothing usable remains.
pub fn safe_filename(name: &str, default_name: &str) -> String {
    let normalized = name.trim().replace('\\', "/");
    let base = normalized.rsplit('/').next().unwrap_or("").trim();
    if base.is_empty() || base == "." || base == ".." {
        s!(default_name)
    } else {
        s!(base)
    }
}

pub fn ensure_directory(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Read a job list file as UTF-8 (a leading BOM is dropped).
/// Returns the display name and the text.
pub fn read_job_file(path: &Path) -> Result<(String, String), LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::Read { path: path.to_path_buf(), source })?;
    let text = decode_job_text(bytes).ok_or_else(|| LoadError::NotUtf8 { path: path.to_path_buf() })?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok((name, text))
}

/// Same as `read_job_file` for in-memory bytes (drag-and-drop on some platforms).
pub fn decode_job_text(bytes: Vec<u8>) -> Option<String> {
    let mut text = String::from_utf8(bytes).ok()?;
    if text.starts_with('\u{feff}') {
        text.drain(..'\u{feff}'.len_utf8());
    }
    Some(text)
}
