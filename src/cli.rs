// src/cli.rs
use std::{env, path::PathBuf};

use color_eyre::eyre::{Result, bail};

use crate::params::{Format, Params};
use crate::runner;

pub fn run() -> Result<()> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    let summary = runner::run(&params)?;

    eprintln!(
        "Scored {} question(s) across {} categor{}.",
        summary.questions,
        summary.categories,
        if summary.categories == 1 { "y" } else { "ies" }
    );
    for path in &summary.files_written {
        eprintln!("Wrote {}", path.display());
    }
    Ok(())
}

fn parse_cli(params: &mut Params) -> Result<()> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-i" | "--input" => {
                let v = args.next();
                match v {
                    Some(v) => params.input = Some(PathBuf::from(v)),
                    None => bail!("Missing value for --input"),
                }
            }
            "--catalog" => {
                let v = args.next();
                match v {
                    Some(v) => params.catalog = Some(PathBuf::from(v)),
                    None => bail!("Missing value for --catalog"),
                }
            }
            "--respondents" => {
                let v = args.next();
                let n: u32 = match v {
                    Some(v) => v.parse()?,
                    None => bail!("Missing value for --respondents"),
                };
                if n == 0 {
                    bail!("--respondents must be > 0");
                }
                params.respondents = n;
            }
            "-o" | "--out" => {
                let v = args.next();
                match v {
                    Some(v) => params.out = PathBuf::from(v),
                    None => bail!("Missing output path"),
                }
            }
            "--format" => {
                let v = args.next();
                params.format = match v.as_deref().map(str::to_ascii_lowercase).as_deref() {
                    Some("csv") => Format::Csv,
                    Some("tsv") => Format::Tsv,
                    Some(other) => bail!("Unknown format: {other}"),
                    None => bail!("Missing value for --format"),
                };
            }
            "--no-headers" => params.headers = false,
            "--stdout" => params.stdout = true,
            "-h" | "--help" => {
                eprintln!("{}", include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => bail!("Unknown arg: {a}"),
        }
    }

    Ok(())
}
