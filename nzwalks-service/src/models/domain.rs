//! Domain entities as stored by the repositories

use uuid::Uuid;

/// An entity the repositories can store.
///
/// Ids are assigned by the repository on add; a freshly mapped entity
/// carries [`Uuid::nil`] until then.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Type name used in logs and error context
    const NAME: &'static str;

    /// The entity's identifier
    fn id(&self) -> Uuid;

    /// Return the entity with its identifier replaced
    #[must_use]
    fn with_id(self, id: Uuid) -> Self;
}

/// A named geographic area
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub area: f64,
    pub lat: f64,
    pub long: f64,
    pub population: i64,
}

impl Entity for Region {
    const NAME: &'static str = "Region";

    fn id(&self) -> Uuid {
        self.id
    }

    fn with_id(self, id: Uuid) -> Self {
        Self { id, ..self }
    }
}

/// A trail belonging to one region with one difficulty level
#[derive(Debug, Clone, PartialEq)]
pub struct Walk {
    pub id: Uuid,
    pub name: String,
    pub length: f64,
    pub region_id: Uuid,
    pub walk_difficulty_id: Uuid,
}

impl Entity for Walk {
    const NAME: &'static str = "Walk";

    fn id(&self) -> Uuid {
        self.id
    }

    fn with_id(self, id: Uuid) -> Self {
        Self { id, ..self }
    }
}

/// Reference data describing how hard a walk is
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkDifficulty {
    pub id: Uuid,
    pub name: String,
}

impl WalkDifficulty {
    /// A difficulty level with a fresh random id
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

impl Entity for WalkDifficulty {
    const NAME: &'static str = "WalkDifficulty";

    fn id(&self) -> Uuid {
        self.id
    }

    fn with_id(self, id: Uuid) -> Self {
        Self { id, ..self }
    }
}
