//! Backend selection.
//!
//! Maps the configured backend identifier onto a [`BackendKind`]. The mapping
//! is a pure function and is evaluated for every request.

use std::fmt;
use std::str::FromStr;

use super::UnknownBackend;

/// One of the persistence technologies a quote store can run on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// Embedded relational store.
    Sqlite,
    /// External relational store.
    Postgres,
    /// Document store.
    Mongo,
}

impl BackendKind {
    pub const ALL: [BackendKind; 3] = [
        BackendKind::Sqlite,
        BackendKind::Postgres,
        BackendKind::Mongo,
    ];

    /// Stable identifier, also accepted by [`select_backend`].
    pub fn as_str(self) -> &'static str {
        match self {
            BackendKind::Sqlite => "sqlite",
            BackendKind::Postgres => "postgres",
            BackendKind::Mongo => "mongo",
        }
    }

    /// Human-readable name used in status reports.
    pub fn display_name(self) -> &'static str {
        match self {
            BackendKind::Sqlite => "SQLite",
            BackendKind::Postgres => "Postgres",
            BackendKind::Mongo => "MongoDB",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackendKind {
    type Err = UnknownBackend;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "h2" | "sqlite" | "embedded" => Ok(BackendKind::Sqlite),
            "postgres" | "postgresql" => Ok(BackendKind::Postgres),
            "mongo" | "mongodb" => Ok(BackendKind::Mongo),
            _ => Err(UnknownBackend(value.to_string())),
        }
    }
}

/// Resolves the active backend from the configured value.
///
/// An absent or blank value selects the embedded store. Anything else must be
/// a recognised identifier (case-insensitive): `h2`/`sqlite`/`embedded`,
/// `postgres`/`postgresql`, or `mongo`/`mongodb`.
pub fn select_backend(value: Option<&str>) -> Result<BackendKind, UnknownBackend> {
    match value.map(str::trim) {
        None | Some("") => Ok(BackendKind::Sqlite),
        Some(value) => value.parse(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_value_defaults_to_sqlite() {
        assert_eq!(select_backend(None), Ok(BackendKind::Sqlite));
        assert_eq!(select_backend(Some("")), Ok(BackendKind::Sqlite));
        assert_eq!(select_backend(Some("   ")), Ok(BackendKind::Sqlite));
    }

    #[test]
    fn test_embedded_aliases() {
        for value in ["h2", "H2", "sqlite", "embedded"] {
            assert_eq!(
                select_backend(Some(value)),
                Ok(BackendKind::Sqlite),
                "{value}"
            );
        }
    }

    #[test]
    fn test_postgres_aliases() {
        for value in ["postgres", "POSTGRES", "postgresql", " postgres "] {
            assert_eq!(
                select_backend(Some(value)),
                Ok(BackendKind::Postgres),
                "{value}"
            );
        }
    }

    #[test]
    fn test_mongo_aliases() {
        for value in ["mongo", "Mongo", "mongodb"] {
            assert_eq!(
                select_backend(Some(value)),
                Ok(BackendKind::Mongo),
                "{value}"
            );
        }
    }

    #[test]
    fn test_unrecognised_value_is_unknown_backend() {
        assert_eq!(
            select_backend(Some("cassandra")),
            Err(UnknownBackend("cassandra".to_string()))
        );
    }

    #[test]
    fn test_as_str_round_trips_through_selector() {
        for kind in BackendKind::ALL {
            assert_eq!(select_backend(Some(kind.as_str())), Ok(kind));
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(BackendKind::Sqlite.display_name(), "SQLite");
        assert_eq!(BackendKind::Postgres.display_name(), "Postgres");
        assert_eq!(BackendKind::Mongo.display_name(), "MongoDB");
    }
}
