//! Upload workflow state machine.
//!
//! DESIGN
//! ======
//! `Empty -> Previewing -> Analyzing -> (navigate away)`. Every transition
//! that starts asynchronous work hands out a [`Ticket`]; the matching
//! completion is applied only while that ticket is still current, so a
//! file read or analysis that finishes after the user cleared or picked
//! another file is dropped instead of overwriting newer state.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use crate::consts::{ACCEPTED_EXTENSIONS, ACCEPTED_MIME_TYPES};
use crate::net::api::AnalysisError;
use crate::routes;

pub const UNSUPPORTED_FILE_MESSAGE: &str = "Please upload an image file";
pub const READ_FAILED_MESSAGE: &str = "Could not read the selected file";
pub const ANALYSIS_FAILED_MESSAGE: &str = "Failed to analyze image. Please try again.";

/// Name, MIME type and size of a user-selected file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    pub mime: String,
    pub size: u64,
}

impl FileMeta {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, size: u64) -> Self {
        Self { name: name.into(), mime: mime.into(), size }
    }

    /// Lowercased extension after the last dot, if any.
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }

    /// JPEG or PNG by MIME type; by extension only when the MIME type is blank.
    pub fn is_accepted_image(&self) -> bool {
        let mime = self.mime.trim().to_ascii_lowercase();
        if mime.is_empty() {
            return self
                .extension()
                .is_some_and(|ext| ACCEPTED_EXTENSIONS.contains(&ext.as_str()));
        }
        ACCEPTED_MIME_TYPES.contains(&mime.as_str())
    }
}

/// A file that has been read and can be rendered locally.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preview {
    pub file: FileMeta,
    /// `data:` URL used as the `<img>` source.
    pub data_url: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UploadPhase {
    #[default]
    Empty,
    Previewing,
    Analyzing,
}

/// Handle identifying one asynchronous step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// What the page should do once an analysis completion has been applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnalysisStep {
    Navigate(&'static str),
    Failed,
    /// The ticket no longer matches; nothing changed.
    Stale,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadState {
    pub phase: UploadPhase,
    pub preview: Option<Preview>,
    pub error: Option<String>,
    pending: Option<FileMeta>,
    epoch: u64,
}

impl UploadState {
    fn next_ticket(&mut self) -> Ticket {
        self.epoch += 1;
        Ticket(self.epoch)
    }

    fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.epoch
    }

    /// A file was accepted and is still being read.
    pub fn is_reading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_analyzing(&self) -> bool {
        self.phase == UploadPhase::Analyzing
    }

    /// Offer the dropped or picked files. Only the first one is considered.
    ///
    /// Returns a ticket when the file was accepted and must now be read.
    /// Ignored outside `Empty`.
    pub fn select_files(&mut self, files: &[FileMeta]) -> Option<Ticket> {
        if self.phase != UploadPhase::Empty {
            return None;
        }
        self.error = None;
        let file = files.first()?;
        if !file.is_accepted_image() {
            self.pending = None;
            self.epoch += 1;
            self.error = Some(UNSUPPORTED_FILE_MESSAGE.to_owned());
            return None;
        }
        self.pending = Some(file.clone());
        Some(self.next_ticket())
    }

    /// Apply a finished read. Returns whether the preview was shown.
    pub fn complete_read(&mut self, ticket: Ticket, data_url: String) -> bool {
        if !self.is_current(ticket) || self.phase != UploadPhase::Empty {
            return false;
        }
        let Some(file) = self.pending.take() else {
            return false;
        };
        self.preview = Some(Preview { file, data_url });
        self.phase = UploadPhase::Previewing;
        true
    }

    /// Apply a failed read. Returns whether the error was recorded.
    pub fn fail_read(&mut self, ticket: Ticket) -> bool {
        if !self.is_current(ticket) || self.pending.take().is_none() {
            return false;
        }
        self.error = Some(READ_FAILED_MESSAGE.to_owned());
        true
    }

    /// Drop the preview, any pending read and any error.
    ///
    /// Refused while analyzing; returns whether the state was reset.
    pub fn clear(&mut self) -> bool {
        if self.is_analyzing() {
            return false;
        }
        self.epoch += 1;
        self.phase = UploadPhase::Empty;
        self.preview = None;
        self.pending = None;
        self.error = None;
        true
    }

    /// Move from `Previewing` to `Analyzing`, yielding the ticket and the
    /// preview to submit.
    pub fn begin_analysis(&mut self) -> Option<(Ticket, Preview)> {
        if self.phase != UploadPhase::Previewing {
            return None;
        }
        let preview = self.preview.clone()?;
        self.phase = UploadPhase::Analyzing;
        self.error = None;
        Some((self.next_ticket(), preview))
    }

    /// Apply the analysis outcome.
    pub fn finish_analysis(&mut self, ticket: Ticket, outcome: Result<(), AnalysisError>) -> AnalysisStep {
        if !self.is_current(ticket) || !self.is_analyzing() {
            return AnalysisStep::Stale;
        }
        self.phase = UploadPhase::Previewing;
        match outcome {
            Ok(()) => AnalysisStep::Navigate(routes::RESULTS),
            Err(_) => {
                self.error = Some(ANALYSIS_FAILED_MESSAGE.to_owned());
                AnalysisStep::Failed
            }
        }
    }
}
