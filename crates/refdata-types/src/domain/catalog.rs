use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Reference datasets managed by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CatalogKind {
    Country,
    Ethnics,
    Religion,
    FamilyRelationship,
    Department,
}

impl CatalogKind {
    pub const ALL: [CatalogKind; 5] = [
        CatalogKind::Country,
        CatalogKind::Ethnics,
        CatalogKind::Religion,
        CatalogKind::FamilyRelationship,
        CatalogKind::Department,
    ];

    /// Stable identifier used for file names and CLI arguments
    pub fn slug(&self) -> &'static str {
        match self {
            CatalogKind::Country => "country",
            CatalogKind::Ethnics => "ethnics",
            CatalogKind::Religion => "religion",
            CatalogKind::FamilyRelationship => "family-relationship",
            CatalogKind::Department => "department",
        }
    }

    /// Human-readable dataset title
    pub fn title(&self) -> &'static str {
        match self {
            CatalogKind::Country => "Countries",
            CatalogKind::Ethnics => "Ethnicities",
            CatalogKind::Religion => "Religions",
            CatalogKind::FamilyRelationship => "Family relationships",
            CatalogKind::Department => "Departments",
        }
    }

    /// Whether records of this kind carry parent references
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, CatalogKind::Department)
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for CatalogKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        CatalogKind::ALL
            .into_iter()
            .find(|kind| kind.slug() == normalized)
            .ok_or_else(|| Error::UnknownCatalog(s.to_string()))
    }
}
