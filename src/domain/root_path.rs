use std::fmt;

use serde::{de::Visitor, Deserialize, Deserializer};

pub const DEFAULT_ROOT_PATH: &str = "/api/v1/resource";

/// Prefix every API route is mounted under, e.g. `/api/v1/resource`.
///
/// Always starts with a `/`, never ends with one, and is made of non-empty
/// segments of ASCII alphanumerics, `-`, `_` and `.`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootPath(String);

impl AsRef<str> for RootPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RootPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Default for RootPath {
    fn default() -> Self {
        Self(DEFAULT_ROOT_PATH.to_string())
    }
}

impl<'de> Deserialize<'de> for RootPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RootPathVisitor;

        impl<'de> Visitor<'de> for RootPathVisitor {
            type Value = RootPath;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a root path such as /api/v1/resource")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                RootPath::parse(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(RootPathVisitor)
    }
}

impl RootPath {
    pub fn parse(s: &str) -> Result<Self, String> {
        let Some(rest) = s.strip_prefix('/') else {
            return Err(format!("root path must start with `/`. found: {s:?}"));
        };
        if rest.is_empty() {
            return Err("root path must not be `/` alone".to_string());
        }
        for segment in rest.split('/') {
            if segment.is_empty() {
                return Err(format!("root path contains an empty segment: {s:?}"));
            }
            if let Some(c) = segment.chars().find(|c| !is_segment_char(*c)) {
                return Err(format!("root path contains forbidden character {c:?}: {s:?}"));
            }
        }
        Ok(Self(s.to_string()))
    }

    /// Joins a route (`/healthz`) onto the prefix.
    pub fn join(&self, route: &str) -> String {
        format!("{}/{}", self.0, route.trim_start_matches('/'))
    }
}

fn is_segment_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')
}
