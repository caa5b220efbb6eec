pub mod record;

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;

use crate::error::LogError;
use crate::probe::ProbeResult;
use record::{HEADER, LogRecord};

/// Append-only CSV log of probe results, held open for the lifetime of the process.
pub struct ResultLog<W = File> {
    out: W,
    path: PathBuf,
}

impl ResultLog<File> {
    /// Open `path` for appending, creating it if needed.
    /// The header row is written only when the file is empty, so restarts never re-header the log.
    pub fn open(path: &Path) -> Result<Self, LogError> {
        let open_error = |source| LogError::Open {
            path: path.to_path_buf(),
            source,
        };

        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .map_err(open_error)?;
        let is_empty = file.metadata().map_err(open_error)?.len() == 0;

        Ok(ResultLog::new(file, path, is_empty))
    }
}

impl<W: Write> ResultLog<W> {
    /// Wrap an already opened sink. A header that cannot be written is reported, not fatal.
    pub fn new(out: W, path: impl Into<PathBuf>, write_header: bool) -> Self {
        let mut result_log = ResultLog {
            out,
            path: path.into(),
        };

        if write_header {
            if let Err(e) = result_log.write_header() {
                log::error!(
                    "Failed to write header to {}: {e}",
                    result_log.path.display()
                );
            }
        }

        result_log
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write one record and flush it before returning.
    /// A record that fails is dropped, never carried over into the next write.
    pub fn append(&mut self, result: &ProbeResult) -> Result<(), LogError> {
        let line = encode(|writer| writer.serialize(LogRecord::from(result)))?;
        self.write_line(&line)
    }

    fn write_header(&mut self) -> Result<(), LogError> {
        let line = encode(|writer| writer.write_record(HEADER))?;
        self.write_line(&line)
    }

    fn write_line(&mut self, line: &[u8]) -> Result<(), LogError> {
        self.out.write_all(line)?;
        self.out.flush()?;
        Ok(())
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

/// Render a single CSV row into an owned buffer.
fn encode<F>(write: F) -> Result<Vec<u8>, LogError>
where
    F: FnOnce(&mut csv::Writer<Vec<u8>>) -> csv::Result<()>,
{
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    write(&mut writer)?;
    writer
        .into_inner()
        .map_err(|e| LogError::Io(e.into_error()))
}

/// Drain `results` into `result_log` on a dedicated blocking thread, one record at a time.
/// The task finishes once every sender is dropped and the channel is empty,
/// yielding the number of records written.
pub fn spawn_result_logger<W>(
    mut result_log: ResultLog<W>,
    mut results: UnboundedReceiver<ProbeResult>,
) -> JoinHandle<usize>
where
    W: Write + Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let mut written = 0;

        while let Some(result) = results.blocking_recv() {
            match result_log.append(&result) {
                Ok(()) => written += 1,
                Err(e) => log::error!(
                    "Failed to write result for {} to {}: {e}",
                    result.target,
                    result_log.path().display()
                ),
            }
        }

        log::info!(
            "Result logger stopped after writing {written} records to {}",
            result_log.path().display()
        );
        written
    })
}
