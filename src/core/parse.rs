// src/core/parse.rs
//
// Flat text → jobs. One job per line:
//   region, parcel
//   region, katastar_region, parcel[, ignored...]
// Fields split on ',', '\t' or ';'. Blank lines and '#' comments are skipped.
// Lines that don't yield a region and a parcel are dropped, never an error.

use super::job::JobInput;

const DELIMS: [char; 3] = [',', '\t', ';'];

/// Jobs plus the line numbers (1-based) that were dropped as malformed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub jobs: Vec<JobInput>,
    pub rejected_lines: Vec<usize>,
}

pub fn parse_jobs(text: &str) -> Vec<JobInput> {
    parse_jobs_report(text).jobs
}

pub fn parse_jobs_report(text: &str) -> ParseReport {
    let mut report = ParseReport::default();

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match parse_line(line) {
            Some(job) => report.jobs.push(job),
            None => report.rejected_lines.push(i + 1),
        }
    }
    report
}

fn parse_line(line: &str) -> Option<JobInput> {
    let mut fields = line.split(DELIMS).map(str::trim).filter(|f| !f.is_empty());

    let first = fields.next()?;
    let second = fields.next()?;
    let job = match fields.next() {
        None => JobInput::new(first, second),
        Some(third) => JobInput::new(first, third).with_katastar(second),
    };

    // Fields are already trimmed and non-empty, this is the final gate.
    job.is_submittable().then_some(job)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_field_is_rejected() {
        assert_eq!(parse_line("Skopje"), None);
        assert_eq!(parse_line(",,;"), None);
    }

    #[test]
    fn mixed_delimiters() {
        assert_eq!(
            parse_line("Ohrid;\t7 ,  99/1"),
            Some(JobInput::new("Ohrid", "99/1").with_katastar("7"))
        );
    }
}
