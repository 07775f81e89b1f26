//! Wire shapes for requests and responses
//!
//! Request fields that the validator inspects are deserialized leniently:
//! strings may be `null`, numbers and ids default to zero and the nil UUID
//! when missing. A missing field therefore fails its validation rule
//! instead of failing the JSON parse.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Region as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionDto {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub area: f64,
    pub lat: f64,
    pub long: f64,
    pub population: i64,
}

/// Body of `POST /regions` and `PUT /regions/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegionRequest {
    pub code: Option<String>,
    pub name: Option<String>,
    pub area: f64,
    pub lat: f64,
    pub long: f64,
    pub population: i64,
}

/// Add and update share one shape and one rule set.
pub type AddRegionRequest = RegionRequest;
pub type UpdateRegionRequest = RegionRequest;

/// Walk as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalkDto {
    pub id: Uuid,
    pub name: String,
    pub length: f64,
    pub region_id: Uuid,
    pub walk_difficulty_id: Uuid,
}

/// Body of `POST /walks` and `PUT /walks/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WalkRequest {
    pub name: Option<String>,
    pub length: f64,
    pub region_id: Uuid,
    pub walk_difficulty_id: Uuid,
}

pub type AddWalkRequest = WalkRequest;
pub type UpdateWalkRequest = WalkRequest;

/// Difficulty level as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalkDifficultyDto {
    pub id: Uuid,
    pub name: String,
}
