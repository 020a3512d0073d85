//! Training progress logging.
//!
//! Messages are emitted through the [`log`] facade; the embedding application
//! picks the backend. [`Verbosity`] gates what a [`TrainingLogger`] forwards.

use serde::{Deserialize, Serialize};

/// How much a training run reports.
///
/// Levels are ordered: every level includes the ones before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verbosity {
    /// No output.
    #[default]
    Silent,
    /// Warnings only.
    Warning,
    /// Start/finish and per-epoch metrics.
    Info,
    /// Everything, including per-epoch bookkeeping.
    Debug,
}

/// Logger for a single training run.
#[derive(Debug, Clone)]
pub struct TrainingLogger {
    verbosity: Verbosity,
    n_epochs: usize,
}

impl TrainingLogger {
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            n_epochs: 0,
        }
    }

    #[inline]
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Returns true if messages at `level` are forwarded.
    #[inline]
    pub fn enabled(&self, level: Verbosity) -> bool {
        level != Verbosity::Silent && self.verbosity >= level
    }

    pub fn start_training(&mut self, n_epochs: usize) {
        self.n_epochs = n_epochs;
        if self.enabled(Verbosity::Info) {
            log::info!("starting training for {n_epochs} epochs");
        }
    }

    /// Log the metrics of a finished epoch as `name=value` pairs.
    pub fn log_epoch(&self, epoch: usize, metrics: &[(&str, f64)]) {
        if !self.enabled(Verbosity::Info) {
            return;
        }
        let formatted = metrics
            .iter()
            .map(|(name, value)| format!("{name}={value:.6}"))
            .collect::<Vec<_>>()
            .join(" ");
        log::info!("[{}/{}] {}", epoch + 1, self.n_epochs, formatted);
    }

    pub fn warn(&self, message: &str) {
        if self.enabled(Verbosity::Warning) {
            log::warn!("{message}");
        }
    }

    pub fn info(&self, message: &str) {
        if self.enabled(Verbosity::Info) {
            log::info!("{message}");
        }
    }

    pub fn debug(&self, message: &str) {
        if self.enabled(Verbosity::Debug) {
            log::debug!("{message}");
        }
    }

    pub fn finish_training(&self) {
        if self.enabled(Verbosity::Info) {
            log::info!("training finished after {} epochs", self.n_epochs);
        }
    }
}

impl Default for TrainingLogger {
    fn default() -> Self {
        Self::new(Verbosity::default())
    }
}
