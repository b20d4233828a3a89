use std::io;

use tracing_subscriber::{
    field::MakeExt,
    filter::{EnvFilter, ParseError},
};

use crate::config;

pub fn set_up(verbosity: u8) -> Result<(), ParseError> {
    let formatter = tracing_subscriber::fmt::format::debug_fn(|writer, field, value| {
        if field.name() == "message" {
            write!(writer, "{:?}", value)
        } else {
            write!(writer, "{}={:?}", field, value)
        }
    })
    .delimited(" ");

    let mut filter = EnvFilter::try_new("warn")?;
    for target in [config::BIN_NAME, "divvy_lib"] {
        filter = filter.add_directive(format!("{}={}", target, max_level(verbosity)).parse()?);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .with_target(true)
        .fmt_fields(formatter)
        .init();

    Ok(())
}

fn max_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
