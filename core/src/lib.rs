//! Data types and constants for the Comic-style tile platformer simulation.
//!
//! This crate holds the value types (`types`), tuning constants
//! (`constants`), and the low-level byte/RLE codec shared by the asset
//! parsers in `platformer-engine`. It has no notion of a tick or a subsystem;
//! those live in the engine crate, which depends on this one.

use log::{LevelFilter, SetLoggerError};
use log4rs::{
    append::{
        console::{ConsoleAppender, Target},
        file::FileAppender,
    },
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

pub mod byte_operations;
pub mod constants;
pub mod types;

/// Configures a `log4rs` pipeline: a stderr appender thresholded at
/// `log_level`, plus an optional append-mode file appender at `file_path`
/// logging everything.
pub fn init_logging(log_level: LevelFilter, file_path: Option<&str>) -> Result<(), SetLoggerError> {
    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();

    let mut config_builder = Config::builder().appender(
        Appender::builder()
            .filter(Box::new(ThresholdFilter::new(log_level)))
            .build("stderr", Box::new(stderr)),
    );

    let mut root = Root::builder().appender("stderr");

    if let Some(path) = file_path {
        if let Ok(logfile) = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S)} {l} - {m}\n")))
            .append(true)
            .build(path)
        {
            config_builder = config_builder.appender(Appender::builder().build("logfile", Box::new(logfile)));
            root = root.appender("logfile");
        }
    }

    let config = config_builder
        .build(root.build(log_level))
        .expect("log4rs config is statically well-formed");

    log4rs::init_config(config)?;
    Ok(())
}
