//! Entity-DTO mappers.
//!
//! Every conversion is written out field by field. Values are copied as-is;
//! request DTOs never carry an id, so drafts are the only target for writes.

use crate::dto::{
    AddRegionRequest, AddWalkRequest, DifficultyDto, RegionDto, UpdateRegionRequest, UpdateWalkRequest, WalkDto,
};
use nzwalks_core::{Difficulty, Region, RegionDraft, Walk, WalkDraft};

impl From<Region> for RegionDto {
    fn from(region: Region) -> Self {
        Self {
            id: region.id,
            code: region.code,
            name: region.name,
            region_image_url: region.region_image_url,
        }
    }
}

impl From<RegionDto> for Region {
    fn from(dto: RegionDto) -> Self {
        Self {
            id: dto.id,
            code: dto.code,
            name: dto.name,
            region_image_url: dto.region_image_url,
        }
    }
}

impl From<AddRegionRequest> for RegionDraft {
    fn from(request: AddRegionRequest) -> Self {
        Self {
            code: request.code,
            name: request.name,
            region_image_url: request.region_image_url,
        }
    }
}

impl From<UpdateRegionRequest> for RegionDraft {
    fn from(request: UpdateRegionRequest) -> Self {
        Self {
            code: request.code,
            name: request.name,
            region_image_url: request.region_image_url,
        }
    }
}

impl From<Difficulty> for DifficultyDto {
    fn from(difficulty: Difficulty) -> Self {
        Self {
            id: difficulty.id,
            name: difficulty.name,
        }
    }
}

impl From<DifficultyDto> for Difficulty {
    fn from(dto: DifficultyDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
        }
    }
}

impl From<Walk> for WalkDto {
    fn from(walk: Walk) -> Self {
        Self {
            id: walk.id,
            name: walk.name,
            description: walk.description,
            length_in_km: walk.length_in_km,
            walk_image_url: walk.walk_image_url,
            region_id: walk.region_id,
            difficulty_id: walk.difficulty_id,
            region: walk.region.map(RegionDto::from),
            difficulty: walk.difficulty.map(DifficultyDto::from),
        }
    }
}

impl From<WalkDto> for Walk {
    fn from(dto: WalkDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            description: dto.description,
            length_in_km: dto.length_in_km,
            walk_image_url: dto.walk_image_url,
            region_id: dto.region_id,
            difficulty_id: dto.difficulty_id,
            region: dto.region.map(Region::from),
            difficulty: dto.difficulty.map(Difficulty::from),
        }
    }
}

impl From<AddWalkRequest> for WalkDraft {
    fn from(request: AddWalkRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            length_in_km: request.length_in_km,
            walk_image_url: request.walk_image_url,
            region_id: request.region_id,
            difficulty_id: request.difficulty_id,
        }
    }
}

impl From<UpdateWalkRequest> for WalkDraft {
    fn from(request: UpdateWalkRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            length_in_km: request.length_in_km,
            walk_image_url: request.walk_image_url,
            region_id: request.region_id,
            difficulty_id: request.difficulty_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nzwalks_core::{RegionId, WalkId, HARD_DIFFICULTY_ID};

    fn region() -> Region {
        Region {
            id: RegionId::new(),
            code: "AKL".to_string(),
            name: "Auckland".to_string(),
            region_image_url: Some("https://images.example/akl.jpg".to_string()),
        }
    }

    #[test]
    fn test_region_round_trip() {
        let region = region();
        let back = Region::from(RegionDto::from(region.clone()));
        assert_eq!(back, region);
    }

    #[test]
    fn test_add_region_request_to_draft() {
        let request = AddRegionRequest {
            code: " rg1 ".to_string(),
            name: "Region1".to_string(),
            region_image_url: Some("url1".to_string()),
        };
        let draft = RegionDraft::from(request);
        assert_eq!(draft.code, " rg1 ");
        assert_eq!(draft.region_image_url.as_deref(), Some("url1"));
    }

    #[test]
    fn test_walk_to_dto_embeds_relations() {
        let region = region();
        let difficulty = Difficulty::new(HARD_DIFFICULTY_ID, "Hard");
        let walk = Walk::from_draft(
            WalkId::new(),
            WalkDraft {
                name: "Hillary Trail".to_string(),
                description: "Four day coastal trail".to_string(),
                length_in_km: 77.0,
                walk_image_url: None,
                region_id: region.id,
                difficulty_id: difficulty.id,
            },
        )
        .with_relations(Some(region.clone()), Some(difficulty));

        let dto = WalkDto::from(walk.clone());
        assert_eq!(dto.region, Some(RegionDto::from(region)));
        assert_eq!(dto.difficulty.as_ref().map(|d| d.name.as_str()), Some("Hard"));
        assert_eq!(dto.length_in_km, 77.0);

        assert_eq!(Walk::from(dto), walk);
    }

    #[test]
    fn test_walk_request_to_draft_round_trip() {
        let request = UpdateWalkRequest {
            name: "Routeburn".to_string(),
            description: "Great Walk".to_string(),
            length_in_km: 33.0,
            walk_image_url: Some("https://images.example/routeburn.jpg".to_string()),
            difficulty_id: HARD_DIFFICULTY_ID,
            region_id: RegionId::new(),
        };

        let draft = WalkDraft::from(request.clone());
        let dto = WalkDto::from(Walk::from_draft(WalkId::new(), draft));

        assert_eq!(dto.name, request.name);
        assert_eq!(dto.description, request.description);
        assert_eq!(dto.length_in_km, request.length_in_km);
        assert_eq!(dto.walk_image_url, request.walk_image_url);
        assert_eq!(dto.region_id, request.region_id);
        assert_eq!(dto.difficulty_id, request.difficulty_id);
        assert!(dto.region.is_none());
    }
}
