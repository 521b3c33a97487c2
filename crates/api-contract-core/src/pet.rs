//! Pet-store models

use serde::{Deserialize, Serialize};
use std::fmt;

/// A pet record as accepted and returned by the pet-store service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: i64,
    pub category: Category,
    pub name: String,
    pub photo_urls: Vec<String>,
    pub tags: Vec<Tag>,
    pub status: PetStatus,
}

/// Pet category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Pet tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

/// Pet availability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetStatus {
    Available,
    Pending,
    Sold,
}

impl PetStatus {
    /// Query-string form used by `findByStatus`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Pending => "pending",
            Self::Sold => "sold",
        }
    }
}

impl Default for PetStatus {
    fn default() -> Self {
        Self::Available
    }
}

impl fmt::Display for PetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Pet {
    /// A pet with placeholder category, photo and tag, as the pet-store
    /// examples use (`id` 0 lets the service assign one)
    pub fn placeholder(name: impl Into<String>, status: PetStatus) -> Self {
        Self {
            id: 0,
            category: Category {
                id: 0,
                name: "string".to_string(),
            },
            name: name.into(),
            photo_urls: vec!["string".to_string()],
            tags: vec![Tag {
                id: 0,
                name: "string".to_string(),
            }],
            status,
        }
    }
}
