use std::fs::File;
use std::path::PathBuf;

use simplelog::{
    ColorChoice, CombinedLogger, Config, LevelFilter, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};
use thiserror::Error;


#[non_exhaustive]
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("a global logger is already installed")]
    AlreadyInitialized(#[from] log::SetLoggerError),
    #[error("couldn't create log file {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Where log records go.
///
/// The tree itself only logs at `debug` and `trace` (rotations, fixup cases), so the terminal stays
/// quiet by default and a file sink is the way to watch rebalancing.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub term_level: LevelFilter,
    /// Also write records to this file, if set.
    pub file: Option<PathBuf>,
    pub file_level: LevelFilter,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            term_level: LevelFilter::Warn,
            file: None,
            file_level: LevelFilter::Debug,
        }
    }
}

/// Install the global logger. Can only succeed once per process.
pub fn init_logging(config: &LogConfig) -> Result<(), LoggingError> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        config.term_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];

    if let Some(path) = &config.file {
        let file = File::create(path)
            .map_err(|source| LoggingError::Io { path: path.clone(), source })?;
        loggers.push(WriteLogger::new(config.file_level, Config::default(), file));
    }

    CombinedLogger::init(loggers)?;
    Ok(())
}
