//! Navigation menu model shared by the sidebar and the route matcher.

pub mod builder;
pub mod matcher;

use std::collections::HashSet;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::enums::NavIcon;
use crate::shared::paths::is_app_relative;

pub use builder::{build_nav_items, customer_nav_items, insert_role_gated, nav_items_for};
pub use matcher::{find_active, is_nav_item_active};

#[derive(Debug, Error)]
pub enum NavError {
    #[error("invalid route pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("unknown navigation icon `{0}`")]
    UnknownIcon(String),

    #[error("duplicate navigation key `{0}`")]
    DuplicateKey(String),

    #[error("navigation entry `{key}` has non application-relative href `{href}`")]
    InvalidHref { key: String, href: String },
}

/// Regular expression tested against the whole location path.
#[derive(Debug, Clone)]
pub struct RoutePattern {
    source: String,
    regex: Regex,
}

impl RoutePattern {
    pub fn new(pattern: &str) -> Result<Self, NavError> {
        let invalid = |source| NavError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        };
        // The raw expression must stand on its own, otherwise a stray `)`
        // would close the anchoring group below.
        Regex::new(pattern).map_err(invalid)?;
        let regex = Regex::new(&format!("^(?:{})$", pattern)).map_err(invalid)?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, pathname: &str) -> bool {
        self.regex.is_match(pathname)
    }
}

impl PartialEq for RoutePattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for RoutePattern {}

impl Serialize for RoutePattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RoutePattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        RoutePattern::new(&source).map_err(serde::de::Error::custom)
    }
}

/// How an entry decides it is active for the current path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "href", rename_all = "camelCase")]
pub enum Matcher {
    StartsWith(String),
    Equals(String),
    Pattern(RoutePattern),
}

impl Matcher {
    pub fn pattern(pattern: &str) -> Result<Self, NavError> {
        RoutePattern::new(pattern).map(Matcher::Pattern)
    }

    pub fn matches(&self, pathname: &str) -> bool {
        match self {
            Matcher::StartsWith(prefix) => pathname.starts_with(prefix.as_str()),
            Matcher::Equals(href) => pathname == href,
            Matcher::Pattern(pattern) => pattern.is_match(pathname),
        }
    }
}

/// One item of the navigation menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavEntry {
    pub key: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<NavIcon>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub external: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matcher: Option<Matcher>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<NavEntry>,
}

impl NavEntry {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            href: None,
            icon: None,
            disabled: false,
            external: false,
            matcher: None,
            items: Vec::new(),
        }
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn with_icon(mut self, icon: NavIcon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn with_matcher(mut self, matcher: Matcher) -> Self {
        self.matcher = Some(matcher);
        self
    }

    pub fn with_items(mut self, items: Vec<NavEntry>) -> Self {
        self.items = items;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn external(mut self) -> Self {
        self.external = true;
        self
    }
}

/// Checks key uniqueness per level and that internal hrefs are app-relative.
pub fn validate_entries(entries: &[NavEntry]) -> Result<(), NavError> {
    let mut seen = HashSet::new();
    for entry in entries {
        if !seen.insert(entry.key.as_str()) {
            return Err(NavError::DuplicateKey(entry.key.clone()));
        }
        if let Some(href) = &entry.href {
            if !entry.external && !is_app_relative(href) {
                return Err(NavError::InvalidHref {
                    key: entry.key.clone(),
                    href: href.clone(),
                });
            }
        }
        validate_entries(&entry.items)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_defaults() {
        let entry = NavEntry::new("overview", "Overview");
        assert_eq!(entry.href, None);
        assert!(!entry.disabled);
        assert!(!entry.external);
        assert!(entry.matcher.is_none());
        assert!(entry.items.is_empty());
    }

    #[test]
    fn test_pattern_is_anchored() {
        let pattern = RoutePattern::new("/dashboard-admin(/.*)?").unwrap();
        assert!(pattern.is_match("/dashboard-admin"));
        assert!(pattern.is_match("/dashboard-admin/cars"));
        assert!(!pattern.is_match("/x/dashboard-admin"));

        let tracking = RoutePattern::new("/tracking").unwrap();
        assert!(!tracking.is_match("/dashboard-admin/tracking"));
    }

    #[test]
    fn test_malformed_pattern_is_typed_error() {
        let err = Matcher::pattern("/cars/(").unwrap_err();
        match err {
            NavError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "/cars/("),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unbalanced_group_is_rejected() {
        for raw in ["/a)|(/b", "/cars)", "(/drivers"] {
            assert!(
                matches!(RoutePattern::new(raw), Err(NavError::InvalidPattern { .. })),
                "{raw} should not compile"
            );
        }
    }

    #[test]
    fn test_alternation_stays_anchored() {
        let pattern = RoutePattern::new("/cars|/drivers").unwrap();
        assert!(pattern.is_match("/cars"));
        assert!(pattern.is_match("/drivers"));
        assert!(!pattern.is_match("/cars/12"));
        assert!(!pattern.is_match("/x/drivers"));
    }

    #[test]
    fn test_pattern_serializes_as_source() {
        let matcher = Matcher::pattern("/dashboard-admin/cars/\\d+").unwrap();
        let json = serde_json::to_value(&matcher).unwrap();
        assert_eq!(json["type"], "pattern");
        assert_eq!(json["href"], "/dashboard-admin/cars/\\d+");
        let back: Matcher = serde_json::from_value(json).unwrap();
        assert_eq!(back, matcher);
    }

    #[test]
    fn test_entry_deserializes_with_defaults() {
        let json = r#"{
            "key": "tracking",
            "title": "Tracking",
            "href": "/dashboard-admin/tracking",
            "icon": "map",
            "matcher": { "type": "startsWith", "href": "/dashboard-admin/tracking" }
        }"#;
        let entry: NavEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.icon, Some(NavIcon::Map));
        assert!(!entry.disabled);
        assert_eq!(
            entry.matcher,
            Some(Matcher::StartsWith("/dashboard-admin/tracking".to_string()))
        );
    }

    #[test]
    fn test_pattern_matcher_rejects_bad_regex_on_deserialize() {
        let json = r#"{ "type": "pattern", "href": "[" }"#;
        assert!(serde_json::from_str::<Matcher>(json).is_err());
    }

    #[test]
    fn test_validate_detects_duplicate_keys() {
        let entries = vec![
            NavEntry::new("cars", "Cars").with_href("/a"),
            NavEntry::new("cars", "Cars again").with_href("/b"),
        ];
        assert!(matches!(
            validate_entries(&entries),
            Err(NavError::DuplicateKey(key)) if key == "cars"
        ));
    }

    #[test]
    fn test_validate_checks_nested_hrefs() {
        let entries = vec![NavEntry::new("group", "Group").with_items(vec![
            NavEntry::new("child", "Child").with_href("dashboard-admin/cars"),
        ])];
        assert!(matches!(
            validate_entries(&entries),
            Err(NavError::InvalidHref { key, .. }) if key == "child"
        ));
    }

    #[test]
    fn test_validate_allows_external_urls() {
        let entries = vec![NavEntry::new("docs", "Docs")
            .with_href("https://example.com/docs")
            .external()];
        assert!(validate_entries(&entries).is_ok());
    }
}
