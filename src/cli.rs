// src/cli.rs
//
// Headless front-end: same controller as the GUI, driven from one task.
// A 100 ms ticker redraws the elapsed time on stderr; Ctrl-C is the stop button.

use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use color_eyre::eyre::{Result, WrapErr, eyre};

use crate::{
    config::{consts::TICK, options::AppOptions},
    core::{
        controller::{Completion, Controller, SubmitTicket},
        job::JobField,
        parse,
    },
    file,
    net::ScrapeClient,
    progress::ProgressView,
};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub files: Vec<PathBuf>,
    pub jobs: Vec<String>,
    pub out: Option<PathBuf>,
    pub api: Option<String>,
    pub timeout_secs: Option<u64>,
    pub help: bool,
}

pub fn run() -> Result<()> {
    let args = parse_cli(std::env::args().skip(1))?;
    if args.help {
        eprintln!("{}", include_str!("cli_help.txt"));
        return Ok(());
    }

    let mut opts = AppOptions::load()?;
    if let Some(api) = &args.api {
        opts.api_base = api.clone();
    }
    if let Some(t) = args.timeout_secs {
        opts.timeout_secs = t;
    }
    if let Some(out) = &args.out {
        opts.download_dir = out.clone();
    }

    let mut controller = Controller::new();
    fill_jobs(&mut controller, &args)?;

    let ticket = controller
        .submit(Instant::now())
        .map_err(|e| eyre!("{e}"))?;
    eprintln!("Submitting {} job(s) to {}", ticket.jobs.len(), opts.scrape_url());

    let client = ScrapeClient::new(&opts).wrap_err("could not build HTTP client")?;
    let runtime = tokio::runtime::Runtime::new()?;
    let completion = runtime.block_on(drive(&mut controller, &client, ticket));
    eprintln!();

    if let Some(text) = ProgressView::from_phase(controller.phase(), controller.elapsed()).text() {
        eprintln!("{text}");
    }

    match completion {
        Completion::Succeeded => {
            let artifact = controller
                .artifact()
                .ok_or_else(|| eyre!("session finished without a result"))?;
            let path = artifact.save_in_dir(&opts.download_dir)?;
            println!("{}", path.display());
            Ok(())
        }
        Completion::Failed(msg) => Err(eyre!(msg)),
        Completion::Cancelled | Completion::Stale => Ok(()),
    }
}

/// Load `--file`s (file mode) or else `--job`s (manual rows) into the controller.
fn fill_jobs(controller: &mut Controller, args: &CliArgs) -> Result<()> {
    if !args.files.is_empty() {
        let mut names = Vec::with_capacity(args.files.len());
        let mut text = String::new();
        for path in &args.files {
            let (name, body) = file::read_job_file(path)?;
            names.push(name);
            text.push_str(&body);
            text.push('\n');
        }
        controller.load_file(&names.join(", "), &text)?;
        return Ok(());
    }

    if args.jobs.is_empty() {
        return Err(eyre!("Specify at least one --file or --job (see --help)"));
    }

    // Inline rows go through the editor like typed rows; unparseable ones stay blank.
    for (idx, raw) in args.jobs.iter().enumerate() {
        if idx > 0 {
            controller.add_row();
        }
        if let Some(job) = parse::parse_jobs(raw).into_iter().next() {
            controller.update_row(idx, JobField::Region, job.region);
            controller.update_row(idx, JobField::Parcel, job.parcel);
            if let Some(k) = job.katastar_region {
                controller.update_row(idx, JobField::KatastarRegion, k);
            }
        } else {
            eprintln!("Skipping job {:?}: need at least region and parcel", raw);
        }
    }
    Ok(())
}

async fn drive(controller: &mut Controller, client: &ScrapeClient, ticket: SubmitTicket) -> Completion {
    let SubmitTicket { id, jobs, cancel } = ticket;

    let request = client.scrape(&jobs, &cancel);
    tokio::pin!(request);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);
    let mut ticker = tokio::time::interval(TICK);

    loop {
        tokio::select! {
            res = &mut request => return controller.complete(id, res, Instant::now()),
            _ = &mut ctrl_c => {
                controller.stop(Instant::now());
                return Completion::Cancelled;
            }
            _ = ticker.tick() => {
                controller.tick(Instant::now());
                if let Some(text) = ProgressView::from_phase(controller.phase(), controller.elapsed()).text() {
                    eprint!("\r{text}");
                    let _ = std::io::stderr().flush();
                }
            }
        }
    }
}

pub fn parse_cli<I>(args: I) -> Result<CliArgs>
where
    I: IntoIterator<Item = String>,
{
    let mut out = CliArgs::default();
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        let mut value = |flag: &str| args.next().ok_or_else(|| eyre!("Missing value for {flag}"));
        match a.as_str() {
            "-f" | "--file" => out.files.push(PathBuf::from(value(&a)?)),
            "-j" | "--job" => out.jobs.push(value(&a)?),
            "-o" | "--out" => out.out = Some(PathBuf::from(value(&a)?)),
            "--api" => out.api = Some(value(&a)?),
            "--timeout" => {
                let v = value(&a)?;
                let secs: u64 = v.parse().wrap_err_with(|| format!("Invalid --timeout: {v}"))?;
                if secs == 0 {
                    return Err(eyre!("--timeout must be positive"));
                }
                out.timeout_secs = Some(secs);
            }
            "-h" | "--help" => out.help = true,
            _ => return Err(eyre!("Unknown arg: {a}")),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(s: &[&str]) -> Vec<String> {
        s.iter().map(|x| s!(*x)).collect()
    }

    #[test]
    fn parses_repeatable_flags() {
        let a = parse_cli(argv(&["-j", "Skopje,1200", "--job", "Bitola;10;55", "-o", "res", "--timeout", "60"])).unwrap();
        assert_eq!(a.jobs, vec!["Skopje,1200", "Bitola;10;55"]);
        assert_eq!(a.out, Some(PathBuf::from("res")));
        assert_eq!(a.timeout_secs, Some(60));
    }

    #[test]
    fn rejects_unknown_and_missing_values() {
        assert!(parse_cli(argv(&["--nope"])).is_err());
        assert!(parse_cli(argv(&["--file"])).is_err());
        assert!(parse_cli(argv(&["--timeout", "0"])).is_err());
    }

    #[test]
    fn inline_jobs_fill_manual_rows() {
        let args = CliArgs { jobs: argv(&["Skopje, 1200", "junk", "Bitola, 10, 55"]), ..Default::default() };
        let mut c = Controller::new();
        fill_jobs(&mut c, &args).unwrap();

        let rows = c.source().jobs();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].region, "Skopje");
        assert!(!rows[1].is_submittable());
        assert_eq!(rows[2].katastar_region.as_deref(), Some("10"));
        assert_eq!(c.source().submittable().len(), 2);
    }
}
