use std::fmt;
use std::path::{Path, PathBuf};

/// SBOM output formats produced for every accepted target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SbomFormat {
    CycloneDxJson,
    SpdxJson,
    SpdxTagValue,
}

impl SbomFormat {
    /// All formats, gate format first
    pub const ALL: [SbomFormat; 3] = [
        SbomFormat::CycloneDxJson,
        SbomFormat::SpdxJson,
        SbomFormat::SpdxTagValue,
    ];
}

impl fmt::Display for SbomFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SbomFormat::CycloneDxJson => write!(f, "CycloneDX JSON"),
            SbomFormat::SpdxJson => write!(f, "SPDX JSON"),
            SbomFormat::SpdxTagValue => write!(f, "SPDX tag-value"),
        }
    }
}

/// What a scanning tool is pointed at
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SbomTarget {
    /// A materialized working copy
    Directory(PathBuf),
    /// A single downloaded manifest
    File(PathBuf),
}

impl SbomTarget {
    pub fn path(&self) -> &Path {
        match self {
            SbomTarget::Directory(path) | SbomTarget::File(path) => path,
        }
    }
}
