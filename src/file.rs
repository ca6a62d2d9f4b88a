/*! File items.

Items flowing through a gate only need to expose their stats, see [FileItem].
[File] is a minimal path + stats pair that pipeline runners can use directly.
!*/
use std::convert::TryFrom;
use std::fs::Metadata;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Anything that can be submitted to a [crate::gate::Gate].
///
/// An item is considered file-like if it has stats.
/// Items returning `None` are rejected by the gate.
pub trait FileItem {
    fn stat(&self) -> Option<&Stat>;
}

/// Subset of filesystem metadata a check usually looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    mtime: SystemTime,
    len: u64,
    is_dir: bool,
}

impl Stat {
    pub fn new(mtime: SystemTime, len: u64, is_dir: bool) -> Self {
        Self { mtime, len, is_dir }
    }

    /// Stats of a regular, empty file modified `secs` seconds after the epoch.
    pub fn with_mtime_secs(secs: u64) -> Self {
        Self::new(UNIX_EPOCH + Duration::from_secs(secs), 0, false)
    }

    /// Get the stat's modification time.
    pub fn mtime(&self) -> SystemTime {
        self.mtime
    }

    /// Get the stat's length in bytes.
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }
}

impl TryFrom<&Metadata> for Stat {
    type Error = std::io::Error;

    fn try_from(meta: &Metadata) -> Result<Self, Self::Error> {
        Ok(Stat {
            mtime: meta.modified()?,
            len: meta.len(),
            is_dir: meta.is_dir(),
        })
    }
}

/// A file as seen by the pipeline: a path and optional stats.
///
/// Stats are optional so that virtual files (stdin, generated buffers...)
/// can flow through stages that don't need them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct File {
    path: PathBuf,
    #[serde(default)]
    stat: Option<Stat>,
}

impl File {
    pub fn new(path: impl Into<PathBuf>, stat: Option<Stat>) -> Self {
        Self {
            path: path.into(),
            stat,
        }
    }

    /// Builds a [File] by reading `path`'s metadata.
    ///
    /// Symlinks are followed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let meta = std::fs::metadata(path)?;
        let stat = Stat::try_from(&meta)?;
        Ok(Self::new(path, Some(stat)))
    }

    /// Get a reference to the file's path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FileItem for File {
    fn stat(&self) -> Option<&Stat> {
        self.stat.as_ref()
    }
}

impl<T: FileItem + ?Sized> FileItem for &T {
    fn stat(&self) -> Option<&Stat> {
        (**self).stat()
    }
}

impl<T: FileItem + ?Sized> FileItem for Box<T> {
    fn stat(&self) -> Option<&Stat> {
        (**self).stat()
    }
}
