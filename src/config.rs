//! Project data layout and root discovery.
//!
//! The raw dataset lives under `<root>/data/pdb/raw/`, where `<root>` is
//! the nearest ancestor directory carrying a `.project-root` marker file.
//! Commands accept `--data-dir` to bypass discovery entirely.

use std::io;
use std::path::{Path, PathBuf};

/// Marker file that names the project root.
pub const ROOT_MARKER: &str = ".project-root";

/// Resolved locations for raw PDB data under a project root.
#[derive(Debug, Clone)]
pub struct DataPaths {
    root: PathBuf,
}

impl DataPaths {
    /// Uses `root` as the project root without discovery.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Walks up from the current directory to the nearest ancestor
    /// containing the [`ROOT_MARKER`] file.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when no ancestor carries the marker, or any
    /// error from querying the current directory.
    pub fn discover() -> io::Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::discover_from(&cwd)
    }

    /// Discovery starting from an explicit directory instead of the
    /// current one.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when no ancestor of `start` carries the marker.
    pub fn discover_from(start: &Path) -> io::Result<Self> {
        start
            .ancestors()
            .find(|dir| dir.join(ROOT_MARKER).is_file())
            .map(|dir| Self::new(dir.to_path_buf()))
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no {ROOT_MARKER} marker found above {}", start.display()),
                )
            })
    }

    /// The project root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding downloaded assembly files.
    #[must_use]
    pub fn assemblies_dir(&self) -> PathBuf {
        self.raw_dir().join("assemblies")
    }

    /// Failure log written alongside the assembly files.
    #[must_use]
    pub fn assembly_log(&self) -> PathBuf {
        self.assemblies_dir().join("download_log.txt")
    }

    /// Directory holding the Chemical Component Dictionary.
    #[must_use]
    pub fn ccd_dir(&self) -> PathBuf {
        self.raw_dir().join("ccd")
    }

    /// Destination of the dictionary archive.
    #[must_use]
    pub fn ccd_file(&self) -> PathBuf {
        self.ccd_dir().join("components.cif.gz")
    }

    fn raw_dir(&self) -> PathBuf {
        self.root.join("data").join("pdb").join("raw")
    }
}
