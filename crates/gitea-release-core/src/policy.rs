//! Conflict policy for pre-existing release assets

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// What to do when an uploaded file's name already exists as an attachment.
///
/// One policy applies uniformly to all files of a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConflictPolicy {
    /// Delete the existing attachment, then upload the new file
    #[default]
    Overwrite,

    /// Abort the run on the first name collision
    Fail,

    /// Leave the existing attachment alone and log a warning
    Skip,
}

impl ConflictPolicy {
    /// Policy name as accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overwrite => "overwrite",
            Self::Fail => "fail",
            Self::Skip => "skip",
        }
    }
}

impl FromStr for ConflictPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "overwrite" => Ok(Self::Overwrite),
            "fail" => Ok(Self::Fail),
            "skip" => Ok(Self::Skip),
            other => Err(Error::invalid_conflict_policy(other)),
        }
    }
}

impl fmt::Display for ConflictPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
