// SPDX-License-Identifier: MPL-2.0
//! Ops transfer queue entities.

use super::contains_ci;
use std::fmt;

/// Identifier of a transfer file or an inbound arrival (e.g. `FILE-1001`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileId(pub String);

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Transfer lifecycle of a queued file.
///
/// `Ready --begin--> Processing --delay elapses--> Transferred`. No
/// transition leaves `Transferred`, and there is no failure or retry path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferStatus {
    Ready,
    Processing,
    Transferred,
}

impl TransferStatus {
    /// Returns the i18n message key for the status tag.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            TransferStatus::Ready => "status-ready",
            TransferStatus::Processing => "status-processing",
            TransferStatus::Transferred => "status-transferred",
        }
    }
}

/// A file awaiting (or having completed) transfer to its destination folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferFile {
    pub id: FileId,
    pub file_name: String,
    pub destination_folder: String,
    pub status: TransferStatus,
}

impl TransferFile {
    /// Starts the transfer. Returns `false` (leaving the row untouched) for
    /// anything already Processing or Transferred.
    pub fn begin(&mut self) -> bool {
        if self.status == TransferStatus::Ready {
            self.status = TransferStatus::Processing;
            true
        } else {
            false
        }
    }

    /// Completes the transfer. Only valid from Processing, so a stale
    /// completion for a row that never started (or already finished) is a
    /// no-op.
    pub fn complete(&mut self) -> bool {
        if self.status == TransferStatus::Processing {
            self.status = TransferStatus::Transferred;
            true
        } else {
            false
        }
    }

    /// Whether the file has reached its destination.
    #[must_use]
    pub fn is_transferred(&self) -> bool {
        self.status == TransferStatus::Transferred
    }

    /// Search filter over file id and file name.
    #[must_use]
    pub fn matches(&self, term: &str) -> bool {
        contains_ci(&self.id.0, term) || contains_ci(&self.file_name, term)
    }
}

/// An inbound notification that a new file is waiting to be picked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileArrival {
    pub id: FileId,
    pub file_name: String,
    pub destination_folder: String,
}

impl FileArrival {
    /// Converts the arrival into a ready-to-transfer queue entry.
    #[must_use]
    pub fn into_file(self) -> TransferFile {
        TransferFile {
            id: self.id,
            file_name: self.file_name,
            destination_folder: self.destination_folder,
            status: TransferStatus::Ready,
        }
    }
}
