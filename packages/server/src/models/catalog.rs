use serde::Serialize;

use crate::entity::{people, planet};

/// A planet mirrored from the catalog.
#[derive(Serialize, utoipa::ToSchema)]
pub struct PlanetResponse {
    #[schema(example = 2)]
    pub id: i32,
    #[schema(example = "Alderaan")]
    pub name: String,
    #[schema(example = "A planet.")]
    pub description: String,
}

impl From<planet::Model> for PlanetResponse {
    fn from(m: planet::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
        }
    }
}

/// A character mirrored from the catalog.
#[derive(Serialize, utoipa::ToSchema)]
pub struct PeopleResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Luke Skywalker")]
    pub name: String,
    #[schema(example = "A person within the Star Wars universe")]
    pub description: String,
}

impl From<people::Model> for PeopleResponse {
    fn from(m: people::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
        }
    }
}
