use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub orbital_period: String,
    pub rotation_period: String,
    pub gravity: String,
    pub population: String,
    pub diameter: String,
    pub climate: String,
    pub terrain: String,
    pub surface_water: String,
}

impl From<entity::planet::Model> for PlanetDto {
    fn from(planet: entity::planet::Model) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            orbital_period: planet.orbital_period,
            rotation_period: planet.rotation_period,
            gravity: planet.gravity,
            population: planet.population,
            diameter: planet.diameter,
            climate: planet.climate,
            terrain: planet.terrain,
            surface_water: planet.surface_water,
        }
    }
}
