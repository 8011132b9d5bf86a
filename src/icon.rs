//! Icon descriptor - one selectable icon option
//!
//! Every descriptor points at a symbolic SVG under the `/icons/` root:
//! `/icons/<slug>-icon-symbolic.svg`

use serde::Serialize;
use std::fmt;

/// Root under which every icon asset lives
pub const ICON_ROOT: &str = "/icons/";

/// Suffix shared by every icon file name
pub const ICON_SUFFIX: &str = "-icon-symbolic.svg";

/// A single icon record.
///
/// Descriptors are plain `Copy` values borrowing `'static` strings, so a
/// caller can freely modify its own copy without touching the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct IconDescriptor {
    /// Position in the catalog (0-based)
    pub idx: usize,
    /// Human-readable display name
    pub title: &'static str,
    /// Relative resource locator served by the asset host
    pub path: &'static str,
}

impl IconDescriptor {
    pub const fn new(idx: usize, title: &'static str, path: &'static str) -> Self {
        Self { idx, title, path }
    }

    /// Last segment of the path, e.g. `pop-os-icon-symbolic.svg`
    pub fn file_name(&self) -> &'static str {
        self.path.rsplit('/').next().unwrap_or(self.path)
    }

    /// Short identifier taken from the file name, e.g. `pop-os`
    pub fn slug(&self) -> &'static str {
        let name = self.file_name();
        name.strip_suffix(ICON_SUFFIX).unwrap_or(name)
    }

    /// Join the locator onto an asset base URL with a single `/` between them
    pub fn url(&self, base: &str) -> String {
        format!("{}/{}", base.trim_end_matches('/'), self.path.trim_start_matches('/'))
    }
}

impl fmt::Display for IconDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} ({})", self.idx, self.title, self.path)
    }
}
