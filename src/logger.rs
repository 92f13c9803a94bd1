use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use log::{LevelFilter, Log, Metadata, Record};

/// Appends log records to a file, one timestamped line each. The terminal
/// itself belongs to the TUI, so this is the only diagnostic channel.
struct FileLogger {
    file: Mutex<File>,
}

impl Log for FileLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut file) = self.file.lock() {
            let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
            let _ = writeln!(
                file,
                "{} {:5} {} {}",
                timestamp,
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        if let Ok(mut file) = self.file.lock() {
            let _ = file.flush();
        }
    }
}

/// Installs the file logger for the rest of the process.
pub fn init(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    log::set_boxed_logger(Box::new(FileLogger {
        file: Mutex::new(file),
    }))
    .map_err(|err| io::Error::new(io::ErrorKind::AlreadyExists, err))?;
    log::set_max_level(LevelFilter::Debug);
    Ok(())
}
