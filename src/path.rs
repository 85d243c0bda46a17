//! Session paths
//!
//! Absolute, lexically normalized paths compared component by component.
//! `/ab` is never treated as an ancestor of `/abc`, and `/a/` equals `/a`.

use crate::error::HopError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Absolute path as a sequence of components rooted at `/`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SessionPath {
    components: Vec<String>,
}

impl SessionPath {
    /// The root path `/`.
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse an absolute path, resolving `.` and `..` lexically.
    pub fn parse(raw: &str) -> Result<Self, HopError> {
        if !raw.starts_with('/') {
            return Err(HopError::invalid_path(raw, "path must be absolute"));
        }
        if raw.contains('\0') {
            return Err(HopError::invalid_path(raw, "path contains a NUL byte"));
        }

        let mut components: Vec<String> = Vec::new();
        for part in raw.split('/') {
            match part {
                "" | "." => {}
                ".." => {
                    components.pop();
                }
                name => components.push(name.to_string()),
            }
        }
        Ok(Self { components })
    }

    /// Parse an optional path argument; an empty string means unset.
    pub fn parse_optional(raw: Option<&str>) -> Result<Option<Self>, HopError> {
        match raw {
            None | Some("") => Ok(None),
            Some(raw) => Self::parse(raw).map(Some),
        }
    }

    pub fn is_root(&self) -> bool {
        self.components.is_empty()
    }

    /// Number of components below root.
    pub fn depth(&self) -> usize {
        self.components.len()
    }

    /// Parent path, or `None` for root.
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }
        Some(Self {
            components: self.components[..self.components.len() - 1].to_vec(),
        })
    }

    /// True when `other`'s components start with this path's components.
    pub fn is_ancestor_or_self_of(&self, other: &SessionPath) -> bool {
        other.components.starts_with(&self.components)
    }

    /// Iterate from this path up to root, inclusive on both ends.
    pub fn ancestors(&self) -> Ancestors<'_> {
        Ancestors {
            components: &self.components,
            remaining: Some(self.components.len()),
        }
    }

    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf::from(self.to_string())
    }
}

/// Iterator over a path and its ancestors, deepest first.
pub struct Ancestors<'a> {
    components: &'a [String],
    remaining: Option<usize>,
}

impl Iterator for Ancestors<'_> {
    type Item = SessionPath;

    fn next(&mut self) -> Option<Self::Item> {
        let len = self.remaining?;
        self.remaining = len.checked_sub(1);
        Some(SessionPath {
            components: self.components[..len].to_vec(),
        })
    }
}

impl fmt::Display for SessionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("/");
        }
        for component in &self.components {
            write!(f, "/{}", component)?;
        }
        Ok(())
    }
}

impl FromStr for SessionPath {
    type Err = HopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for SessionPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SessionPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
