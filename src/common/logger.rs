use std::{
    fs::{self, File, OpenOptions},
    io::{self, BufRead, BufReader, Write},
    path::Path,
    sync::{Arc, Mutex},
};

use tracing_subscriber::{
    EnvFilter,
    fmt::{self, time::LocalTime},
    prelude::*,
};

use crate::configs::Config;

pub fn init(config: &Config) {
    let log_level = config
        .logging
        .as_ref()
        .and_then(|l| l.level.as_deref())
        .unwrap_or("info");

    let filters = config
        .logging
        .as_ref()
        .and_then(|l| l.filters.as_deref())
        .unwrap_or("");

    let filter_str = if filters.is_empty() {
        log_level.to_string()
    } else {
        format!("{},{}", log_level, filters)
    };

    // RUST_LOG always wins over the configured level
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    let stdout_layer = fmt::layer()
        .with_timer(LocalTime::rfc_3339())
        .with_target(true)
        .with_file(false);

    let file_layer = config
        .logging
        .as_ref()
        .and_then(|l| l.file.as_ref())
        .map(|file_config| {
            if let Some(parent) = Path::new(&file_config.path).parent() {
                if let Err(e) = fs::create_dir_all(parent) {
                    eprintln!("Failed to create log directory: {}", e);
                }
            }

            let writer = BoundedFileWriter::new(file_config.path.clone(), file_config.max_lines);
            fmt::layer()
                .with_writer(writer)
                .with_timer(LocalTime::rfc_3339())
                .with_target(true)
                .with_file(false)
                .with_ansi(false)
        });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();
}

/// Appends log lines to a file and periodically drops the oldest lines
/// so the file never grows past `max_lines` by more than one prune cycle.
#[derive(Clone)]
struct BoundedFileWriter {
    path: String,
    max_lines: u32,
    lines_since_prune: Arc<Mutex<u32>>,
}

impl BoundedFileWriter {
    fn new(path: String, max_lines: u32) -> Self {
        Self {
            path,
            max_lines,
            lines_since_prune: Arc::new(Mutex::new(0)),
        }
    }

    fn prune(&self) -> io::Result<()> {
        if !Path::new(&self.path).exists() {
            return Ok(());
        }

        let reader = BufReader::new(File::open(&self.path)?);
        let lines: Vec<String> = reader.lines().collect::<Result<_, _>>()?;

        if lines.len() > self.max_lines as usize {
            let start = lines.len() - self.max_lines as usize;
            let mut file = File::create(&self.path)?;
            for line in &lines[start..] {
                writeln!(file, "{}", line)?;
            }
        }
        Ok(())
    }
}

impl io::Write for BoundedFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(buf)?;

        let new_lines = buf.iter().filter(|&&b| b == b'\n').count() as u32;
        let mut counter = self.lines_since_prune.lock().unwrap_or_else(|e| e.into_inner());
        *counter += new_lines;

        // Prune once every 10% of max_lines, at least every 50 lines
        let prune_threshold = (self.max_lines / 10).max(50);
        if *counter >= prune_threshold {
            *counter = 0;
            drop(counter);
            if let Err(e) = self.prune() {
                eprintln!("Failed to prune log file: {}", e);
            }
        }

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> fmt::MakeWriter<'a> for BoundedFileWriter {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
