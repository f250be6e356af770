use anyhow::Context;
use clap::Parser;
use sinetable::TableConfig;
use std::io::{self, BufWriter};
use workflow::runner::Runner;

mod workflow;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Print the sinbytes lookup table as a C array initializer"
)]
struct Args {}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let _args = Args::parse();

    let runner = Runner::new(TableConfig::default());
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let report = runner.execute(&mut out).context("writing table to stdout")?;

    log::info!(
        "done: {} samples, {} lines, values in [{}, {}]",
        report.samples,
        report.lines,
        report.stats.min,
        report.stats.max
    );

    Ok(())
}
