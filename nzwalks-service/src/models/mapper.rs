//! Structural conversions between wire shapes and domain entities

use uuid::Uuid;

use super::domain::{Region, Walk, WalkDifficulty};
use super::dto::{RegionDto, RegionRequest, WalkDifficultyDto, WalkDto, WalkRequest};

impl From<RegionRequest> for Region {
    fn from(request: RegionRequest) -> Self {
        Self {
            id: Uuid::nil(),
            code: request.code.unwrap_or_default(),
            name: request.name.unwrap_or_default(),
            area: request.area,
            lat: request.lat,
            long: request.long,
            population: request.population,
        }
    }
}

impl From<Region> for RegionDto {
    fn from(region: Region) -> Self {
        Self {
            id: region.id,
            code: region.code,
            name: region.name,
            area: region.area,
            lat: region.lat,
            long: region.long,
            population: region.population,
        }
    }
}

impl From<WalkRequest> for Walk {
    fn from(request: WalkRequest) -> Self {
        Self {
            id: Uuid::nil(),
            name: request.name.unwrap_or_default(),
            length: request.length,
            region_id: request.region_id,
            walk_difficulty_id: request.walk_difficulty_id,
        }
    }
}

impl From<Walk> for WalkDto {
    fn from(walk: Walk) -> Self {
        Self {
            id: walk.id,
            name: walk.name,
            length: walk.length,
            region_id: walk.region_id,
            walk_difficulty_id: walk.walk_difficulty_id,
        }
    }
}

impl From<WalkDifficulty> for WalkDifficultyDto {
    fn from(difficulty: WalkDifficulty) -> Self {
        Self {
            id: difficulty.id,
            name: difficulty.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_request_maps_without_id() {
        let request = RegionRequest {
            code: Some("WGN".to_string()),
            name: Some("Wellington".to_string()),
            area: 100.0,
            lat: -41.3,
            long: 174.8,
            population: 200_000,
        };
        let region = Region::from(request);
        assert!(region.id.is_nil());
        assert_eq!(region.code, "WGN");
        assert_eq!(region.long, 174.8);
    }

    #[test]
    fn test_region_dto_copies_every_field() {
        let id = Uuid::new_v4();
        let region = Region {
            id,
            code: "AKL".to_string(),
            name: "Auckland".to_string(),
            area: 4894.0,
            lat: -36.8,
            long: 174.7,
            population: 1_718_982,
        };
        let dto = RegionDto::from(region.clone());
        assert_eq!(dto.id, id);
        assert_eq!(dto.code, region.code);
        assert_eq!(dto.name, region.name);
        assert_eq!(dto.area, region.area);
        assert_eq!(dto.lat, region.lat);
        assert_eq!(dto.long, region.long);
        assert_eq!(dto.population, region.population);
    }

    #[test]
    fn test_walk_round_trip_keeps_references() {
        let region_id = Uuid::new_v4();
        let difficulty_id = Uuid::new_v4();
        let walk = Walk::from(WalkRequest {
            name: Some("Routeburn".to_string()),
            length: 32.0,
            region_id,
            walk_difficulty_id: difficulty_id,
        });
        let dto = WalkDto::from(walk);
        assert!(dto.id.is_nil());
        assert_eq!(dto.region_id, region_id);
        assert_eq!(dto.walk_difficulty_id, difficulty_id);
    }
}
