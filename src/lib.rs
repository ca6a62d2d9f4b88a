//! # some-gate
//!
//! Conditional passthrough stage for file pipelines.
//!
//! A [Gate] holds back the files it receives until a caller-supplied check passes on one of them,
//! then releases every held file followed by that one, and lets all later files through unchecked.
//! The typical check is "is this source file newer than the destination artifact?":
//! if no source changed, nothing goes downstream.
//!
//! The gate itself never looks at files beyond asking for their stats, and performs no I/O.
//!
//! ```
//! use some_gate::file::{File, FileItem, Stat};
//! use some_gate::pipeline::GateExt;
//!
//! let dest = Stat::with_mtime_secs(100);
//! let sources = [50, 80, 150, 30]
//!     .into_iter()
//!     .map(|ts| File::new(format!("{ts}.js"), Some(Stat::with_mtime_secs(ts))));
//!
//! let out: Vec<File> = sources
//!     .gate(|f: &File| f.stat().map_or(false, |s| s.mtime() > dest.mtime()))
//!     .collect();
//! assert_eq!(out.len(), 4);
//! ```
pub mod error;
pub mod file;
pub mod filtering;
pub mod gate;
pub mod pipeline;

pub use error::Error;
pub use file::{File, FileItem, Stat};
pub use filtering::{Check, Options};
pub use gate::{Gate, Released};
