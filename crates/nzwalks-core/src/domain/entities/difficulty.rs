//! Difficulty entity.

use crate::DifficultyId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Difficulty grade of a walk ("Easy", "Medium", "Hard").
///
/// Difficulties are reference data: they are seeded with the schema and
/// only read through the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Difficulty {
    pub id: DifficultyId,
    pub name: String,
}

impl Difficulty {
    #[must_use]
    pub fn new(id: DifficultyId, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }

    /// The difficulties inserted by the seed migration.
    #[must_use]
    pub fn seeded() -> Vec<Self> {
        vec![
            Self::new(EASY_DIFFICULTY_ID, "Easy"),
            Self::new(MEDIUM_DIFFICULTY_ID, "Medium"),
            Self::new(HARD_DIFFICULTY_ID, "Hard"),
        ]
    }
}

// Keep in sync with migrations/*_seed_difficulties.sql.
pub const EASY_DIFFICULTY_ID: DifficultyId =
    DifficultyId::from_uuid(Uuid::from_u128(0x54466f17_02af_48e7_8ed3_5a4a8bfacf6f));
pub const MEDIUM_DIFFICULTY_ID: DifficultyId =
    DifficultyId::from_uuid(Uuid::from_u128(0xea294873_7a8c_4c0f_bfa7_a2eb492cbf8c));
pub const HARD_DIFFICULTY_ID: DifficultyId =
    DifficultyId::from_uuid(Uuid::from_u128(0xf808ddcd_b5bb_4d67_a4a8_d2e2f62a3d3c));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_ids_match_migration() {
        assert_eq!(EASY_DIFFICULTY_ID.to_string(), "54466f17-02af-48e7-8ed3-5a4a8bfacf6f");
        assert_eq!(MEDIUM_DIFFICULTY_ID.to_string(), "ea294873-7a8c-4c0f-bfa7-a2eb492cbf8c");
        assert_eq!(HARD_DIFFICULTY_ID.to_string(), "f808ddcd-b5bb-4d67-a4a8-d2e2f62a3d3c");
    }

    #[test]
    fn test_seeded_names() {
        let names: Vec<String> = Difficulty::seeded().into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["Easy", "Medium", "Hard"]);
    }
}
