//! Region entity.

use crate::RegionId;
use serde::{Deserialize, Serialize};

/// A geographic region that walks belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Unique identifier, assigned by the repository on create.
    pub id: RegionId,
    /// Short region code, e.g. "AKL".
    pub code: String,
    /// Display name.
    pub name: String,
    /// Optional image for the region.
    pub region_image_url: Option<String>,
}

/// Mutable fields of a [`Region`].
///
/// Creates and updates take a draft, never a full entity, so the identifier
/// cannot be chosen or changed by a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionDraft {
    pub code: String,
    pub name: String,
    pub region_image_url: Option<String>,
}

impl Region {
    /// Builds the region stored under `id` from a draft.
    #[must_use]
    pub fn from_draft(id: RegionId, draft: RegionDraft) -> Self {
        Self {
            id,
            code: draft.code,
            name: draft.name,
            region_image_url: draft.region_image_url,
        }
    }

    /// Replaces every mutable field, keeping the identifier.
    pub fn apply(&mut self, draft: RegionDraft) {
        self.code = draft.code;
        self.name = draft.name;
        self.region_image_url = draft.region_image_url;
    }

    /// Returns the mutable fields of this region.
    #[must_use]
    pub fn to_draft(&self) -> RegionDraft {
        RegionDraft {
            code: self.code.clone(),
            name: self.name.clone(),
            region_image_url: self.region_image_url.clone(),
        }
    }
}
