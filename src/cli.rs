// src/cli.rs
use std::{env, path::PathBuf, sync::Arc};

use crate::config::options::ScrapeOptions;
use crate::core::net::Client;
use crate::file::FileSink;
use crate::progress::Progress;
use crate::scrape;

/// Prints run status to stdout.
struct CliProgress;

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        println!("Scraping {total} candidate posts...");
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn tick(&mut self, resolved: usize, total: usize) {
        println!("  {resolved}/{total} candidates resolved");
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let opts = parse_cli()?;

    let client = Arc::new(Client::new());
    let sink = FileSink::new(&opts.out_dir);
    let mut progress = CliProgress;

    let archived = scrape::run(&opts, client, &sink, Some(&mut progress))?;

    // The run never errors on thin results; the counts are the contract.
    println!(
        "Archived {archived} of {} requested posts into {}",
        opts.posts_count,
        opts.out_dir.display()
    );
    Ok(())
}

fn parse_cli() -> Result<ScrapeOptions, Box<dyn std::error::Error>> {
    let mut opts = ScrapeOptions::default();
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-n" | "--count" => {
                let v: usize = args.next().ok_or("Missing value for --count")?.parse()?;
                if v == 0 { return Err("Post count must be positive".into()); }
                opts.posts_count = v;
            }
            "--url" => opts.listing_url = args.next().ok_or("Missing value for --url")?,
            "-o" | "--out" => {
                opts.out_dir = PathBuf::from(args.next().ok_or("Missing output directory")?);
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(opts)
}
