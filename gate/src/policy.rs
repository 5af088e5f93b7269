//! Static page-to-access-policy table.
//!
//! SYSTEM CONTEXT
//! ==============
//! Built once at startup and read by the access gate and the layout chrome.
//! Entries are either static paths or templated paths whose final segment is
//! dynamic (`/diaries/[id]`).
//!
//! TRADE-OFFS
//! ==========
//! A templated entry matches any path that starts with its static prefix and
//! has no exact entry of its own, so `/diaries/42/anything` resolves to the
//! detail policy too. This is permissive on purpose; tighten it here rather
//! than at call sites.

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Error building a [`PolicyTable`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolicyError {
    #[error("policy path must start with '/': {0}")]
    NotAbsolute(String),
    #[error("policy path has more than one dynamic segment: {0}")]
    MultipleDynamicSegments(String),
    #[error("dynamic segment must be the last segment: {0}")]
    DynamicNotLast(String),
    #[error("malformed dynamic segment in {0}")]
    MalformedSegment(String),
    #[error("duplicate policy path: {0}")]
    Duplicate(String),
}

/// Who may view a page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccessType {
    #[default]
    Anyone,
    MembersOnly,
}

/// Which chrome regions a page shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutFlags {
    pub header: bool,
    pub banner: bool,
    pub navigation: bool,
    pub footer: bool,
}

impl LayoutFlags {
    pub const FULL: Self = Self { header: true, banner: true, navigation: true, footer: true };
    pub const NONE: Self = Self { header: false, banner: false, navigation: false, footer: false };
    pub const FRAME: Self = Self { header: true, banner: false, navigation: false, footer: true };
}

impl Default for LayoutFlags {
    fn default() -> Self {
        Self::FULL
    }
}

/// Policy record for one page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagePolicy {
    pub access: AccessType,
    pub layout: LayoutFlags,
}

impl PagePolicy {
    #[must_use]
    pub const fn new(access: AccessType, layout: LayoutFlags) -> Self {
        Self { access, layout }
    }
}

/// Diary app routes.
pub const DIARY_PAGES: &[(&str, PagePolicy)] = &[
    ("/", PagePolicy::new(AccessType::Anyone, LayoutFlags::FULL)),
    ("/diaries", PagePolicy::new(AccessType::Anyone, LayoutFlags::FULL)),
    ("/diaries/new", PagePolicy::new(AccessType::MembersOnly, LayoutFlags::FRAME)),
    ("/diaries/[id]", PagePolicy::new(AccessType::MembersOnly, LayoutFlags::FRAME)),
    ("/pictures", PagePolicy::new(AccessType::Anyone, LayoutFlags::FULL)),
    ("/auth/login", PagePolicy::new(AccessType::Anyone, LayoutFlags::NONE)),
];

#[derive(Clone, Debug)]
struct Template {
    prefix: String,
    policy: PagePolicy,
}

/// Immutable lookup from page path to [`PagePolicy`].
#[derive(Clone, Debug, Default)]
pub struct PolicyTable {
    exact: BTreeMap<String, PagePolicy>,
    templates: Vec<Template>,
}

impl PolicyTable {
    /// Build a table from `(pattern, policy)` pairs.
    ///
    /// # Errors
    ///
    /// Returns a [`PolicyError`] for relative paths, duplicate patterns, or
    /// templated patterns whose dynamic segment is malformed, repeated, or not
    /// last.
    pub fn from_entries<'a, I>(entries: I) -> Result<Self, PolicyError>
    where
        I: IntoIterator<Item = (&'a str, PagePolicy)>,
    {
        let mut table = Self::default();
        for (pattern, policy) in entries {
            table.insert(pattern, policy)?;
        }
        Ok(table)
    }

    /// The diary app table built from [`DIARY_PAGES`].
    ///
    /// # Errors
    ///
    /// Only if [`DIARY_PAGES`] itself is malformed.
    pub fn diary() -> Result<Self, PolicyError> {
        Self::from_entries(DIARY_PAGES.iter().copied())
    }

    fn insert(&mut self, pattern: &str, policy: PagePolicy) -> Result<(), PolicyError> {
        if !pattern.starts_with('/') {
            return Err(PolicyError::NotAbsolute(pattern.to_owned()));
        }
        let normalized = normalize_path(pattern);
        match parse_template(normalized)? {
            None => {
                let path = normalized.to_owned();
                if self.exact.insert(path, policy).is_some() {
                    return Err(PolicyError::Duplicate(pattern.to_owned()));
                }
            }
            Some(prefix) => {
                if self.templates.iter().any(|t| t.prefix == prefix) {
                    return Err(PolicyError::Duplicate(pattern.to_owned()));
                }
                self.templates.push(Template { prefix, policy });
            }
        }
        Ok(())
    }

    /// Resolve `path`: exact entry first, then the longest templated prefix.
    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<&PagePolicy> {
        let path = normalize_path(path);
        if let Some(policy) = self.exact.get(path) {
            return Some(policy);
        }
        self.best_template(path).map(|t| &t.policy)
    }

    fn best_template(&self, path: &str) -> Option<&Template> {
        self.templates
            .iter()
            .filter(|t| path.len() > t.prefix.len() && path.starts_with(t.prefix.as_str()))
            .max_by_key(|t| t.prefix.len())
    }

    /// Policy for `path`, falling back to the public default when unresolved.
    #[must_use]
    pub fn policy_for(&self, path: &str) -> PagePolicy {
        self.lookup(path).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exact.len() + self.templates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Strip query, fragment, and trailing slash. The root stays `/`.
#[must_use]
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

/// `Ok(None)` for a static pattern, `Ok(Some(prefix))` for a templated one.
/// The prefix keeps its trailing slash, e.g. `/diaries/[id]` -> `/diaries/`.
fn parse_template(pattern: &str) -> Result<Option<String>, PolicyError> {
    let segments: Vec<&str> = pattern.split('/').collect();
    let mut dynamic_at = None;
    for (i, segment) in segments.iter().enumerate() {
        let opens = segment.contains('[');
        let closes = segment.contains(']');
        if !opens && !closes {
            continue;
        }
        let name = segment.strip_prefix('[').and_then(|s| s.strip_suffix(']'));
        if !name.is_some_and(|n| !n.is_empty() && !n.contains(['[', ']'])) {
            return Err(PolicyError::MalformedSegment(pattern.to_owned()));
        }
        if dynamic_at.replace(i).is_some() {
            return Err(PolicyError::MultipleDynamicSegments(pattern.to_owned()));
        }
    }
    let Some(at) = dynamic_at else {
        return Ok(None);
    };
    if at != segments.len() - 1 {
        return Err(PolicyError::DynamicNotLast(pattern.to_owned()));
    }
    let mut prefix = segments[..at].join("/");
    prefix.push('/');
    Ok(Some(prefix))
}
