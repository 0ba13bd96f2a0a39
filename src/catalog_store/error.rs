use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Medicine,
    Pharmacy,
    Physician,
    Plan,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Medicine => write!(f, "Medicine"),
            EntityKind::Pharmacy => write!(f, "Pharmacy"),
            EntityKind::Physician => write!(f, "Physician"),
            EntityKind::Plan => write!(f, "Plan"),
        }
    }
}

/// Errors returned by catalog lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },
}

impl CatalogError {
    pub fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        CatalogError::NotFound {
            kind,
            id: id.into(),
        }
    }
}
