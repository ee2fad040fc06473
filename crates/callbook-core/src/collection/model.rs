//! Session and Template domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The two kinds of named call collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CollectionKind {
    /// Run once, then marked finished.
    Session,
    /// Reusable, no usage tracking.
    Template,
}

impl CollectionKind {
    /// Lowercase label used inside alert sentences ("Please name your session").
    pub fn label(&self) -> &'static str {
        match self {
            CollectionKind::Session => "session",
            CollectionKind::Template => "template",
        }
    }

    /// Capitalised label used at the start of alert sentences ("Session saved").
    pub fn title(&self) -> &'static str {
        match self {
            CollectionKind::Session => "Session",
            CollectionKind::Template => "Template",
        }
    }
}

/// One entry of a collection.
///
/// Template members only carry a name; `used` and `timestamp` are meaningful
/// for sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionMember {
    pub name: String,
    #[serde(default)]
    pub used: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl CollectionMember {
    /// A template entry.
    pub fn template(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            used: false,
            timestamp: None,
        }
    }

    /// A fresh, not-yet-used session entry.
    pub fn session(name: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            used: false,
            timestamp: Some(timestamp),
        }
    }
}

/// A named, ordered collection of calls (a Session or a Template).
///
/// Member names are unique within one collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub name: String,
    pub kind: CollectionKind,
    /// `true` once a session has been run. Always `false` for templates.
    #[serde(default)]
    pub finished: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub members: Vec<CollectionMember>,
}

impl Collection {
    /// Builds a new collection of `kind` from call names in the given order.
    ///
    /// Session members are stamped with `created_at`.
    pub fn from_names<I, S>(kind: CollectionKind, name: impl Into<String>, names: I, created_at: DateTime<Utc>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let members = names
            .into_iter()
            .map(|n| match kind {
                CollectionKind::Session => CollectionMember::session(n, created_at),
                CollectionKind::Template => CollectionMember::template(n),
            })
            .collect();
        Self {
            name: name.into(),
            kind,
            finished: false,
            finished_at: None,
            members,
        }
    }

    /// Member names in collection order.
    pub fn member_names(&self) -> Vec<String> {
        self.members.iter().map(|m| m.name.clone()).collect()
    }

    /// Whether this is a session that can still be run.
    pub fn is_runnable(&self) -> bool {
        self.kind == CollectionKind::Session && !self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels() {
        assert_eq!(CollectionKind::Session.label(), "session");
        assert_eq!(CollectionKind::Template.title(), "Template");
        assert_eq!(CollectionKind::Session.to_string(), "session");
        assert_eq!("template".parse::<CollectionKind>().unwrap(), CollectionKind::Template);
    }

    #[test]
    fn test_from_names_annotates_members_per_kind() {
        let now = Utc::now();
        let session = Collection::from_names(CollectionKind::Session, "Monday", ["A", "B"], now);
        assert!(session.is_runnable());
        assert!(session.members.iter().all(|m| !m.used && m.timestamp == Some(now)));

        let template = Collection::from_names(CollectionKind::Template, "Basics", ["A"], now);
        assert!(!template.is_runnable());
        assert_eq!(template.members, vec![CollectionMember::template("A")]);
        assert_eq!(template.member_names(), vec!["A".to_string()]);
    }
}
