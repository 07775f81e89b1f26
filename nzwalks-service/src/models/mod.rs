//! Domain entities and their wire representations

mod domain;
mod dto;
mod mapper;

pub use domain::{Entity, Region, Walk, WalkDifficulty};
pub use dto::{
    AddRegionRequest, AddWalkRequest, RegionDto, RegionRequest, UpdateRegionRequest,
    UpdateWalkRequest, WalkDifficultyDto, WalkDto, WalkRequest,
};
