mod args;
mod output;

use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::args::{Args, Input, OutputFormat};

fn init_logging(args: &Args) -> Option<WorkerGuard> {
    let filter = args.log_level.as_deref().map_or_else(
        || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        EnvFilter::new,
    );

    match &args.log_dir {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "armasm.log");
            let (writer, guard) = tracing_appender::non_blocking(file_appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
            None
        }
    }
}

fn read_input(input: &Input) -> Result<Vec<u8>> {
    match input {
        Input::Stdin => {
            let mut data = Vec::new();
            io::stdin()
                .read_to_end(&mut data)
                .context("reading stdin")?;
            Ok(data)
        }
        Input::File(path) => {
            fs::read(path).with_context(|| format!("reading {}", path.display()))
        }
    }
}

/// `data` past its first `skip` bytes, empty when `skip` goes past the end.
fn skip_header(data: &[u8], skip: usize) -> &[u8] {
    data.get(skip..).unwrap_or_default()
}

/// Lists every `(name, bytes)` input in order. An input that couldn't be read
/// or that stops on an invalid word is logged and the next one is still listed.
///
/// Returns `false` if any input failed.
fn list_inputs(
    out: &mut impl Write,
    format: OutputFormat,
    skip: usize,
    show_names: bool,
    inputs: impl IntoIterator<Item = (String, Result<Vec<u8>>)>,
) -> Result<bool> {
    let mut all_ok = true;

    for (name, data) in inputs {
        let data = match data {
            Ok(data) => data,
            Err(e) => {
                tracing::error!("{e:#}");
                all_ok = false;
                continue;
            }
        };
        tracing::info!("{name}: {} bytes", data.len());

        let code = skip_header(&data, skip);
        if code.is_empty() && !data.is_empty() {
            tracing::warn!("{name}: skipping {skip} bytes leaves nothing to decode");
        }

        let label = show_names.then_some(name.as_str());
        all_ok &= output::write_listing(&mut *out, format, label, code, skip)?;
    }

    Ok(all_ok)
}

fn run(args: &Args) -> Result<bool> {
    let inputs = args.inputs();
    let show_names = inputs.len() > 1;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let sources = inputs.iter().map(|input| (input.name(), read_input(input)));
    let all_ok = list_inputs(&mut out, args.format, args.skip, show_names, sources)?;

    out.flush()?;
    Ok(all_ok)
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let _guard = init_logging(&args);

    if run(&args)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
