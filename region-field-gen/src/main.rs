//! CLI entrypoint for `region-field-gen`.

use std::io::Write;

use clap::Parser;
use region_field_gen::cli::Args;
use region_field_gen::error::GenError;
use region_field_gen::generate::{self, Outcome};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> Result<(), GenError> {
    init_tracing();
    let args = Args::parse();
    match generate::run(&args.schema, args.out.as_deref(), args.should_check)? {
        Outcome::Rendered(source) => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(source.as_bytes())
                .map_err(|err| GenError::Io {
                    path: "<stdout>".into(),
                    source: err,
                })
        }
        Outcome::Written(_) | Outcome::UpToDate(_) => Ok(()),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}
