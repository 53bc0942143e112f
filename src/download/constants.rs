//! Fixed endpoints and tuning constants for the download components.

use std::time::Duration;

/// Base URL serving per-entry assembly files.
pub const ASSEMBLY_BASE_URL: &str = "https://files.rcsb.org/download/";

/// Location of the full Chemical Component Dictionary archive.
pub const CCD_URL: &str = "https://files.rcsb.org/pub/pdb/data/monomers/components.cif.gz";

/// Total per-request timeout, covering connect through body read.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

/// Default cap on simultaneous in-flight assembly requests.
pub const DEFAULT_CONCURRENCY: usize = 100;
