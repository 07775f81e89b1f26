//! Request validation for regions and walks
//!
//! Validators collect every violated rule into a [`FieldErrors`] map keyed by
//! the request field name. A request is valid iff the map is empty. The only
//! short-circuit is an absent request, which yields a single error under
//! [`REQUEST_FIELD`].
//!
//! Walk validation also checks that the referenced region and difficulty
//! exist. It only reads through [`ReadRepository`], and the reads are not
//! tied to the write that follows: a region can vanish in between.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{Region, RegionRequest, WalkDifficulty, WalkRequest};
use crate::repository::{ReadRepository, RepositoryResult};

/// Key used when the request body itself is missing
pub const REQUEST_FIELD: &str = "Request";

/// Field name to error messages, in field-name order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against a field
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Messages recorded for `field`, if any
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Names of the fields that failed, sorted
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Total number of messages across all fields
    pub fn error_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Check a region add or update request
pub fn validate_region(request: Option<&RegionRequest>) -> FieldErrors {
    let mut errors = FieldErrors::new();

    let Some(request) = request else {
        errors.add(REQUEST_FIELD, "Region request cannot be empty");
        return errors;
    };

    if is_blank(request.code.as_deref()) {
        errors.add("Code", "Code cannot be null, empty or white space");
    }
    if is_blank(request.name.as_deref()) {
        errors.add("Name", "Name cannot be null, empty or white space");
    }
    if request.area <= 0.0 {
        errors.add("Area", "Area must be greater than zero");
    }
    if request.population < 0 {
        errors.add("Population", "Population cannot be less than zero");
    }

    errors
}

/// Check a walk add or update request, including its references
///
/// Both lookups always run so every violation is reported together. A
/// repository failure during a lookup is returned as `Err` untouched.
pub async fn validate_walk<R, D>(
    request: Option<&WalkRequest>,
    regions: &R,
    difficulties: &D,
) -> RepositoryResult<FieldErrors>
where
    R: ReadRepository<Region>,
    D: ReadRepository<WalkDifficulty>,
{
    let mut errors = FieldErrors::new();

    let Some(request) = request else {
        errors.add(REQUEST_FIELD, "Walk request cannot be empty");
        return Ok(errors);
    };

    // Unlike regions, a whitespace-only walk name is accepted.
    if request.name.as_deref().map_or(true, str::is_empty) {
        errors.add("Name", "Name cannot be empty");
    }
    if request.length <= 0.0 {
        errors.add("Length", "Length must be greater than zero");
    }

    let (region, difficulty) = tokio::try_join!(
        regions.get(&request.region_id),
        difficulties.get(&request.walk_difficulty_id),
    )?;

    if region.is_none() {
        errors.add("RegionId", "RegionId is invalid");
    }
    if difficulty.is_none() {
        errors.add("WalkDifficultyId", "WalkDifficultyId is invalid");
    }

    Ok(errors)
}
