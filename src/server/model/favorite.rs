use std::fmt;

/// What kind of entity a favorite points at
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FavoriteTarget {
    Person,
    Planet,
}

impl FavoriteTarget {
    /// Split a target ID into the `(people_id, planet_id)` columns of a favorite row
    pub fn columns(self, id: i32) -> (Option<i32>, Option<i32>) {
        match self {
            Self::Person => (Some(id), None),
            Self::Planet => (None, Some(id)),
        }
    }
}

impl fmt::Display for FavoriteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Person => write!(f, "person"),
            Self::Planet => write!(f, "planet"),
        }
    }
}
