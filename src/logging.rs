use std::fs::{self, File};
use std::io;
use std::path::Path;

use env_logger::{Builder, Env, Logger, Target, WriteStyle};
use log::{LevelFilter, Log, Metadata, Record};

/// Sends each record to every logger whose filter accepts it.
pub struct Dispatch {
    loggers: Vec<Logger>,
}

impl Dispatch {
    pub fn new(loggers: Vec<Logger>) -> Self {
        Self { loggers }
    }

    pub fn max_level(&self) -> LevelFilter {
        self.loggers
            .iter()
            .map(Logger::filter)
            .max()
            .unwrap_or(LevelFilter::Off)
    }
}

impl Log for Dispatch {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.loggers.iter().any(|l| l.enabled(metadata))
    }

    fn log(&self, record: &Record) {
        for logger in &self.loggers {
            if logger.matches(record) {
                logger.log(record);
            }
        }
    }

    fn flush(&self) {
        for logger in &self.loggers {
            logger.flush();
        }
    }
}

/// Stderr logger filtered by `RUST_LOG`, or `default_filter` when unset.
pub fn console_builder(default_filter: &str) -> Builder {
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_filter));
    builder.target(Target::Stderr);
    builder
}

/// Logger that writes every record from `debug` up into `file`, uncolored.
pub fn file_builder(file: File) -> Builder {
    let mut builder = Builder::new();
    builder
        .filter_level(LevelFilter::Debug)
        .write_style(WriteStyle::Never)
        .target(Target::Pipe(Box::new(file)));
    builder
}

/// Installs the global logger.
///
/// Records always go to stderr through [`console_builder`]. With a
/// `log_file` they also go to that file at debug level; the file is truncated
/// first so each run starts a fresh log.
pub fn init(default_filter: &str, log_file: Option<&Path>) -> io::Result<()> {
    let mut loggers = vec![console_builder(default_filter).build()];

    if let Some(path) = log_file {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        loggers.push(file_builder(File::create(path)?).build());
    }

    let dispatch = Dispatch::new(loggers);
    let max_level = dispatch.max_level();
    log::set_boxed_logger(Box::new(dispatch))
        .map_err(|err| io::Error::new(io::ErrorKind::AlreadyExists, err))?;
    log::set_max_level(max_level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;
    use std::path::PathBuf;

    fn temp_log(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("checkerboard-{}-{name}.log", std::process::id()))
    }

    fn emit(dispatch: &Dispatch, level: Level, message: &str) {
        dispatch.log(
            &Record::builder()
                .level(level)
                .target("checkerboard")
                .args(format_args!("{message}"))
                .build(),
        );
    }

    #[test]
    fn file_gets_debug_while_console_keeps_its_filter() {
        let console_path = temp_log("console");
        let file_path = temp_log("file");

        let mut console = Builder::new();
        console
            .parse_filters("info")
            .write_style(WriteStyle::Never)
            .target(Target::Pipe(Box::new(File::create(&console_path).unwrap())));
        let file = file_builder(File::create(&file_path).unwrap()).build();

        let dispatch = Dispatch::new(vec![console.build(), file]);
        assert_eq!(dispatch.max_level(), LevelFilter::Debug);

        emit(&dispatch, Level::Debug, "built board");
        emit(&dispatch, Level::Info, "Square(col: 1, row: 0)");
        emit(&dispatch, Level::Trace, "too chatty");
        dispatch.flush();

        let console_log = fs::read_to_string(&console_path).unwrap();
        let file_log = fs::read_to_string(&file_path).unwrap();
        let _ = fs::remove_file(&console_path);
        let _ = fs::remove_file(&file_path);

        assert!(!console_log.contains("built board"));
        assert!(console_log.contains("Square(col: 1, row: 0)"));
        assert!(file_log.contains("built board"));
        assert!(file_log.contains("Square(col: 1, row: 0)"));
        assert!(!file_log.contains("too chatty"));
    }

    #[test]
    fn empty_dispatch_is_off() {
        assert_eq!(Dispatch::new(Vec::new()).max_level(), LevelFilter::Off);
    }
}
