//! # jvm-discovery
//!
//! Concurrent discovery of installed Java runtimes.
//!
//! Discovery walks a set of root directories in parallel, picks out
//! directories whose names look like Java homes, checks each for a
//! `bin/java` (or `bin\java.exe`) launcher, and runs it with `-version` to
//! read the installed version.
//!
//! ## Features
//!
//! - `discover()` scans explicit root directories through a bounded worker pool
//! - `discover_mode()` picks roots for a [`DiscoveryMode`] and, for
//!   [`DiscoveryMode::Local`], also sweeps the executable search path
//! - `spawn_discovery()` runs discovery in the background and delivers the
//!   result once through a oneshot channel
//! - `probe_version()` reads the version of a single launcher
//!
//! ## Example
//!
//! ```rust,no_run
//! use jvm_discovery::{discover_mode, DiscoverOptions, DiscoveryMode};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let found = discover_mode(DiscoveryMode::Global, &DiscoverOptions::default()).await;
//!     for java in &found {
//!         println!("{} at {}", java.version(), java.path().display());
//!     }
//! }
//! ```

mod candidate;
mod detection;
mod discover;
mod error;
mod options;
mod platform;
mod roots;

pub use candidate::JavaCandidate;
pub use detection::{
    probe_version, try_probe_version, DirectoryScanner, KeywordFilter, ScanRequest,
};
pub use discover::{discover, discover_mode, spawn_discovery};
pub use error::{ProbeError, ScanError};
pub use options::{
    DiscoverOptions, DEFAULT_EXCLUDE_KEYWORDS, DEFAULT_MATCH_KEYWORDS, DEFAULT_WORKER_COUNT,
};
pub use platform::Platform;
pub use roots::{DiscoveryMode, RootPathProvider};
