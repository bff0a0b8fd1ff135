use crate::error::{BumpError, Result};

/// Represents a semantic version with major, minor, and patch components.
///
/// Follows semantic versioning specification (major.minor.patch).
#[derive(Debug, Clone, PartialEq)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

/// Represents which version component to increment for a release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BumpKind {
    Major,
    Minor,
    Patch,
}

impl Version {
    /// Creates a new Version with the specified major, minor, and patch components.
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Returns the release tag name for this version, e.g. "v1.2.4".
    pub fn tag_name(&self) -> String {
        format!("v{}", self)
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Parses a `major.minor.patch` version string.
///
/// Expects exactly three dot-separated non-negative integer components.
///
/// # Arguments
/// * `version` - Version string to parse (e.g., "1.2.3")
///
/// # Returns
/// * `Ok(Version)` - Successfully parsed version
/// * `Err` - If the string has the wrong number of components or a
///   component is not a base-10 non-negative integer
pub fn parse_version(version: &str) -> Result<Version> {
    let parts: Vec<&str> = version.split('.').collect();
    if parts.len() != 3 {
        return Err(BumpError::version(format!(
            "{} (expected x.y.z)",
            version
        )));
    }

    let component = |part: &str, name: &str| -> Result<u32> {
        part.parse::<u32>().map_err(|_| {
            BumpError::version(format!(
                "non-numeric {} component '{}' in {}",
                name, part, version
            ))
        })
    };

    let major = component(parts[0], "major")?;
    let minor = component(parts[1], "minor")?;
    let patch = component(parts[2], "patch")?;

    Ok(Version::new(major, minor, patch))
}

/// Bumps a version according to the specified bump kind.
///
/// Increments the appropriate version component and resets lower components to 0:
/// - **Major**: major += 1, minor = 0, patch = 0
/// - **Minor**: minor += 1, patch = 0
/// - **Patch**: patch += 1
///
/// Pure function, no side effects.
pub fn bump_version(mut version: Version, kind: BumpKind) -> Version {
    match kind {
        BumpKind::Major => {
            version.major += 1;
            version.minor = 0;
            version.patch = 0;
        }
        BumpKind::Minor => {
            version.minor += 1;
            version.patch = 0;
        }
        BumpKind::Patch => {
            version.patch += 1;
        }
    }
    version
}
