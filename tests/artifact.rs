// tests/artifact.rs
//
// Decoding server payloads and writing them to disk.
//
use katastar_scrape::file::{Artifact, read_job_file};
use tempfile::tempdir;

#[test]
fn decodes_wrapped_base64() {
    let a = Artifact::from_b64("r.xlsx", "aGVs\nbG8g\r\nd29y bGQ=", "results.xlsx").unwrap();
    assert_eq!(a.bytes(), b"hello world");
    assert_eq!(a.len(), 11);
    assert_eq!(a.mime(), "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet");
}

#[test]
fn invalid_base64_is_rejected() {
    assert!(Artifact::from_b64("r.xlsx", "@@not-base64@@", "results.xlsx").is_err());
}

#[test]
fn saves_under_server_name_only() {
    let dir = tempdir().unwrap();
    let a = Artifact::from_b64("../escape/x.xlsx", "UEsDBA==", "results.xlsx").unwrap();
    assert_eq!(a.filename(), "x.xlsx");

    let out = dir.path().join("nested");
    let p = a.save_in_dir(&out).unwrap();
    assert_eq!(p, out.join("x.xlsx"));
    assert_eq!(std::fs::read(&p).unwrap(), b"PK\x03\x04");
}

#[test]
fn reads_job_file_with_bom() {
    let dir = tempdir().unwrap();
    let p = dir.path().join("jobs.csv");
    std::fs::write(&p, "\u{feff}Skopje,1200\n").unwrap();

    let (name, text) = read_job_file(&p).unwrap();
    assert_eq!(name, "jobs.csv");
    assert_eq!(text, "Skopje,1200\n");

    assert!(read_job_file(&dir.path().join("missing.txt")).is_err());
}
