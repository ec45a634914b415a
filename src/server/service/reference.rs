//! Read access to the imported people & planets.

use sea_orm::DatabaseConnection;

use crate::{
    model::{people::PersonDto, planet::PlanetDto},
    server::{
        data::{people::PeopleRepository, planet::PlanetRepository},
        error::{lookup::LookupError, Error},
    },
};

pub struct ReferenceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReferenceService<'a> {
    /// Creates a new instance of [`ReferenceService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all_people(&self) -> Result<Vec<PersonDto>, Error> {
        let people = PeopleRepository::new(self.db).get_all().await?;

        Ok(people.into_iter().map(PersonDto::from).collect())
    }

    /// Gets a person, [`LookupError::PersonNotFound`] if the ID does not exist
    pub async fn get_person(&self, people_id: i32) -> Result<PersonDto, Error> {
        let person = PeopleRepository::new(self.db)
            .get(people_id)
            .await?
            .ok_or(LookupError::PersonNotFound(people_id))?;

        Ok(person.into())
    }

    pub async fn get_all_planets(&self) -> Result<Vec<PlanetDto>, Error> {
        let planets = PlanetRepository::new(self.db).get_all().await?;

        Ok(planets.into_iter().map(PlanetDto::from).collect())
    }

    /// Gets a planet, [`LookupError::PlanetNotFound`] if the ID does not exist
    pub async fn get_planet(&self, planet_id: i32) -> Result<PlanetDto, Error> {
        let planet = PlanetRepository::new(self.db)
            .get(planet_id)
            .await?
            .ok_or(LookupError::PlanetNotFound(planet_id))?;

        Ok(planet.into())
    }
}
