use crate::error::SimError;
use crate::models::TrajectorySample;
use csv::Writer;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Receives one sample per autopilot tick, in time order. Recording never feeds back into
/// the physics.
pub trait SampleSink {
    fn record(&mut self, sample: &TrajectorySample);
}

/// Discards every sample.
pub struct NullSink;

impl SampleSink for NullSink {
    fn record(&mut self, _sample: &TrajectorySample) {}
}

impl SampleSink for Vec<TrajectorySample> {
    fn record(&mut self, sample: &TrajectorySample) {
        self.push(*sample);
    }
}

/// CSV trajectory log. If the destination cannot be opened or written, the problem is
/// reported once and later samples are dropped.
pub struct TrajectoryLog<W: Write> {
    writer: Option<Writer<W>>,
    reported: bool,
    rows: usize,
}

impl TrajectoryLog<File> {
    /// Truncates `path` at the start of a run; rows are appended from then on.
    pub fn create<P: AsRef<Path>>(path: P) -> Self {
        match File::create(path.as_ref()) {
            Ok(file) => Self::from_writer(file),
            Err(e) => {
                let mut log = Self {
                    writer: None,
                    reported: false,
                    rows: 0,
                };
                log.report(&format!(
                    "failed to open trajectory file {}: {}",
                    path.as_ref().display(),
                    e
                ));
                log
            }
        }
    }
}

impl<W: Write> TrajectoryLog<W> {
    pub fn from_writer(inner: W) -> Self {
        Self {
            writer: Some(Writer::from_writer(inner)),
            reported: false,
            rows: 0,
        }
    }

    pub fn is_available(&self) -> bool {
        self.writer.is_some()
    }

    /// Rows successfully written so far.
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn flush(&mut self) -> Result<(), SimError> {
        if let Some(writer) = self.writer.as_mut() {
            writer.flush()?;
        }
        Ok(())
    }

    /// Flushes and hands back the underlying writer, if it is still usable.
    pub fn into_inner(self) -> Option<W> {
        self.writer.and_then(|w| w.into_inner().ok())
    }

    fn report(&mut self, message: &str) {
        if !self.reported {
            eprintln!("Warning: {}; continuing without trajectory logging", message);
            self.reported = true;
        }
    }
}

impl<W: Write> SampleSink for TrajectoryLog<W> {
    fn record(&mut self, sample: &TrajectorySample) {
        let Some(writer) = self.writer.as_mut() else {
            return;
        };
        match writer.serialize(sample) {
            Ok(()) => self.rows += 1,
            Err(e) => {
                self.writer = None;
                self.report(&format!("failed to write trajectory sample: {}", e));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn sample(time: f64) -> TrajectorySample {
        TrajectorySample {
            time,
            altitude: 1000.0 - time,
            descent_rate: -23.5,
            throttle: 0.5,
            proportional: 0.1,
            integral: 0.0,
            derivative: -0.2,
        }
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
        }
    }

    #[test]
    fn csv_output_has_header_and_rows() {
        let mut log = TrajectoryLog::from_writer(Vec::new());
        log.record(&sample(0.0));
        log.record(&sample(0.1));
        assert_eq!(log.rows(), 2);

        let output = String::from_utf8(log.into_inner().unwrap()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "Time (s),Altitude (m),Descent Rate (m/s),Throttle,Proportional,Integral,Derivative"
        );
        assert!(lines[2].starts_with("0.1,999.9,-23.5,0.5,"));
    }

    #[test]
    fn write_failure_disables_log_without_panicking() {
        let mut log = TrajectoryLog::from_writer(BrokenPipe);
        // csv buffers internally, so push enough rows to force a write through
        for i in 0..10_000 {
            log.record(&sample(i as f64));
        }
        assert!(!log.is_available());
        assert!(log.rows() < 10_000);
    }

    #[test]
    fn unopenable_path_degrades_gracefully() {
        let mut log = TrajectoryLog::create("/nonexistent-directory/trajectory.csv");
        assert!(!log.is_available());
        log.record(&sample(0.0));
        assert_eq!(log.rows(), 0);
        assert!(log.flush().is_ok());
    }
}
