// src/core/job.rs
use serde::{Deserialize, Serialize};

/// One requested parcel lookup.
///
/// Serializes straight into the `/scrape` wire shape; an absent
/// `katastar_region` is omitted rather than sent as an empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobInput {
    pub region: String,
    pub parcel: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub katastar_region: Option<String>,
}

/// Editable column of a job row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JobField {
    Region,
    KatastarRegion,
    Parcel,
}

impl JobField {
    pub const ALL: [JobField; 3] = [JobField::Region, JobField::KatastarRegion, JobField::Parcel];

    pub fn label(self) -> &'static str {
        match self {
            JobField::Region => "Region *",
            JobField::KatastarRegion => "Cadastral region (optional)",
            JobField::Parcel => "Parcel *",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            JobField::Region => "Parcel region",
            JobField::KatastarRegion => "Cadastral department",
            JobField::Parcel => "Parcel number",
        }
    }
}

impl JobInput {
    pub fn new(region: impl Into<String>, parcel: impl Into<String>) -> Self {
        Self { region: region.into(), parcel: parcel.into(), katastar_region: None }
    }

    pub fn with_katastar(mut self, katastar_region: impl Into<String>) -> Self {
        self.katastar_region = Some(katastar_region.into());
        self
    }

    /// Both required fields non-empty after trimming.
    #[inline]
    pub fn is_submittable(&self) -> bool {
        !self.region.trim().is_empty() && !self.parcel.trim().is_empty()
    }

    /// Trimmed copy ready for the wire, or `None` if not submittable.
    pub fn cleaned(&self) -> Option<JobInput> {
        if !self.is_submittable() {
            return None;
        }
        let katastar_region = self
            .katastar_region
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .map(String::from);
        Some(JobInput {
            region: s!(self.region.trim()),
            parcel: s!(self.parcel.trim()),
            katastar_region,
        })
    }

    pub fn get(&self, field: JobField) -> &str {
        match field {
            JobField::Region => &self.region,
            JobField::KatastarRegion => self.katastar_region.as_deref().unwrap_or(""),
            JobField::Parcel => &self.parcel,
        }
    }

    /// Replace one field. An empty cadastral region means "not specified".
    pub fn set(&mut self, field: JobField, value: String) {
        match field {
            JobField::Region => self.region = value,
            JobField::KatastarRegion => {
                self.katastar_region = if value.is_empty() { None } else { Some(value) };
            }
            JobField::Parcel => self.parcel = value,
        }
    }
}

/// Cleaned, submittable subset of `jobs`, order preserved.
pub fn submittable(jobs: &[JobInput]) -> Vec<JobInput> {
    jobs.iter().filter_map(JobInput::cleaned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleaned_trims_and_drops_blank_katastar() {
        let j = JobInput {
            region: s!("  Skopje "),
            parcel: s!("1200\t"),
            katastar_region: Some(s!("   ")),
        };
        assert_eq!(j.cleaned(), Some(JobInput::new("Skopje", "1200")));
    }

    #[test]
    fn whitespace_only_fields_are_not_submittable() {
        assert!(!JobInput::new(" ", "12").is_submittable());
        assert!(!JobInput::new("Bitola", "").is_submittable());
        assert_eq!(JobInput::new("", "").cleaned(), None);
    }

    #[test]
    fn wire_shape_omits_absent_katastar() {
        let v = serde_json::to_value(JobInput::new("Skopje", "1200")).unwrap();
        assert_eq!(v, serde_json::json!({ "region": "Skopje", "parcel": "1200" }));

        let v = serde_json::to_value(JobInput::new("Bitola", "55").with_katastar("10")).unwrap();
        assert_eq!(v["katastar_region"], "10");
    }

    #[test]
    fn set_empty_katastar_clears_it() {
        let mut j = JobInput::new("a", "b").with_katastar("k");
        j.set(JobField::KatastarRegion, s!());
        assert_eq!(j.katastar_region, None);
        assert_eq!(j.get(JobField::KatastarRegion), "");
    }
}
