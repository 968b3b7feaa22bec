use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal failures; bad records are never reported through this type
#[derive(Debug, Error)]
pub enum Error {
    /// Reading the input, or creating or writing an output file
    #[error("failed to {action} `{}`", .path.display())]
    Io {
        /// What was being attempted
        action: &'static str,
        /// The file or directory involved
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
    /// A [`crate::LineSink`] refused a line
    #[error("failed to write {report} report line")]
    Sink {
        /// `zip` or `date`
        report: &'static str,
        /// The error the sink returned
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Wraps an I/O error with what was being done to which path
    pub(crate) fn io(
        action: &'static str,
        path: impl Into<PathBuf>,
    ) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| Error::Io {
            action,
            path,
            source,
        }
    }
}

/// Result with this crate's [`Error`]
pub type Result<T, E = Error> = std::result::Result<T, E>;
