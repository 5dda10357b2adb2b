//! Walk entity.

use super::{Difficulty, Region};
use crate::{DifficultyId, RegionId, WalkId};
use serde::{Deserialize, Serialize};

/// A walking track inside a region.
///
/// `region` and `difficulty` are resolved by the repository when the walk is
/// read; they are never written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Walk {
    pub id: WalkId,
    pub name: String,
    pub description: String,
    pub length_in_km: f64,
    pub walk_image_url: Option<String>,
    pub region_id: RegionId,
    pub difficulty_id: DifficultyId,
    pub region: Option<Region>,
    pub difficulty: Option<Difficulty>,
}

/// Mutable fields of a [`Walk`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalkDraft {
    pub name: String,
    pub description: String,
    pub length_in_km: f64,
    pub walk_image_url: Option<String>,
    pub region_id: RegionId,
    pub difficulty_id: DifficultyId,
}

impl Walk {
    /// Builds the walk stored under `id` from a draft, without relations.
    #[must_use]
    pub fn from_draft(id: WalkId, draft: WalkDraft) -> Self {
        Self {
            id,
            name: draft.name,
            description: draft.description,
            length_in_km: draft.length_in_km,
            walk_image_url: draft.walk_image_url,
            region_id: draft.region_id,
            difficulty_id: draft.difficulty_id,
            region: None,
            difficulty: None,
        }
    }

    /// Attaches the resolved region and difficulty.
    #[must_use]
    pub fn with_relations(mut self, region: Option<Region>, difficulty: Option<Difficulty>) -> Self {
        self.region = region;
        self.difficulty = difficulty;
        self
    }

    /// Replaces every mutable field, keeping the identifier.
    ///
    /// Relations are dropped when the foreign key they belong to changes.
    pub fn apply(&mut self, draft: WalkDraft) {
        if self.region_id != draft.region_id {
            self.region = None;
        }
        if self.difficulty_id != draft.difficulty_id {
            self.difficulty = None;
        }
        self.name = draft.name;
        self.description = draft.description;
        self.length_in_km = draft.length_in_km;
        self.walk_image_url = draft.walk_image_url;
        self.region_id = draft.region_id;
        self.difficulty_id = draft.difficulty_id;
    }

    /// Returns the mutable fields of this walk.
    #[must_use]
    pub fn to_draft(&self) -> WalkDraft {
        WalkDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            length_in_km: self.length_in_km,
            walk_image_url: self.walk_image_url.clone(),
            region_id: self.region_id,
            difficulty_id: self.difficulty_id,
        }
    }
}
