use std::fs;
use std::path::Path;

use regex::Regex;

use crate::error::{BumpError, Result};

/// A loaded package manifest.
///
/// Holds the raw file text alongside the fields bump-version cares about.
/// The raw text is kept so the version can be rewritten with a textual
/// substitution that preserves formatting and key order everywhere else.
#[derive(Debug, Clone)]
pub struct Manifest {
    /// Package name, empty string if the manifest has no `name` field
    pub name: String,
    /// Current version string, e.g. "1.2.3"
    pub version: String,
    /// Whether the manifest declares a `package` or `prepack` script
    pub has_package_script: bool,
    raw: String,
}

impl Manifest {
    /// The raw manifest text as read from disk.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

/// Loads and validates a package manifest from disk.
///
/// # Arguments
/// * `path` - Path to the manifest file (typically package.json)
///
/// # Returns
/// * `Ok(Manifest)` - Successfully loaded manifest
/// * `Err` - If the file is unreadable, not valid JSON, or the `version`
///   field is absent or not a string
pub fn load(path: &Path) -> Result<Manifest> {
    let raw = fs::read_to_string(path).map_err(|e| {
        BumpError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {}", path.display(), e),
        ))
    })?;

    let value: serde_json::Value = serde_json::from_str(&raw)?;

    let version = value
        .get("version")
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| BumpError::schema("version field not found or not a string"))?
        .to_string();

    let name = value
        .get("name")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default()
        .to_string();

    let has_package_script = value
        .get("scripts")
        .and_then(serde_json::Value::as_object)
        .map(|scripts| scripts.contains_key("package") || scripts.contains_key("prepack"))
        .unwrap_or(false);

    Ok(Manifest {
        name,
        version,
        has_package_script,
        raw,
    })
}

/// Replaces the version value in the raw manifest text.
///
/// Textual substitution anchored on the `"version"` key and the exact old
/// value. Every other byte of the file (formatting, key order, unknown
/// fields) is preserved; the old version literal must appear in value
/// position or the substitution fails.
///
/// Substituting the same target value twice yields identical text.
///
/// # Arguments
/// * `raw` - Raw manifest text
/// * `old_version` - Exact current version string
/// * `new_version` - Replacement version string
///
/// # Returns
/// * `Ok(String)` - Updated manifest text
/// * `Err` - If the old version literal is not found in value position
pub fn substitute_version(raw: &str, old_version: &str, new_version: &str) -> Result<String> {
    let pattern = format!(r#"("version"\s*:\s*)"{}""#, regex::escape(old_version));
    let re = Regex::new(&pattern)
        .map_err(|e| BumpError::schema(format!("invalid version pattern: {}", e)))?;

    if !re.is_match(raw) {
        return Err(BumpError::schema(format!(
            "version \"{}\" not found in manifest text",
            old_version
        )));
    }

    Ok(re
        .replace_all(raw, format!("${{1}}\"{}\"", new_version))
        .into_owned())
}

/// Writes updated manifest text back to disk.
pub fn write(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents)?;
    Ok(())
}
