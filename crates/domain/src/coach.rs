use derive_more::{Deref, Display, From};

use crate::{Client, CreateError, Name, ReadError, UpdateError, ValidationError};

#[allow(async_fn_in_trait)]
pub trait CoachService {
    async fn get_profile(&self) -> Result<Coach, ReadError>;
    async fn create_coach(&self, details: CoachDetails, password: &str)
    -> Result<Coach, CreateError>;
    async fn replace_coach(&self, coach: Coach) -> Result<Coach, UpdateError>;
    async fn get_clients_of(&self, id: CoachID) -> Result<Vec<Client>, ReadError>;
}

#[allow(async_fn_in_trait)]
pub trait CoachRepository {
    async fn read_profile(&self) -> Result<Coach, ReadError>;
    async fn create_coach(&self, details: CoachDetails, password: &str)
    -> Result<Coach, CreateError>;
    async fn replace_coach(&self, coach: Coach) -> Result<Coach, UpdateError>;
    async fn read_clients_of(&self, id: CoachID) -> Result<Vec<Client>, ReadError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coach {
    pub id: CoachID,
    pub details: CoachDetails,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoachDetails {
    pub name: Name,
    pub last_name: String,
    pub profile_name: String,
    pub email: String,
}

impl CoachDetails {
    pub fn new(
        name: &str,
        last_name: &str,
        profile_name: &str,
        email: &str,
    ) -> Result<Self, ValidationError> {
        let mut missing = vec![];
        if name.trim().is_empty() {
            missing.push("name");
        }
        if email.trim().is_empty() {
            missing.push("email");
        }
        if !missing.is_empty() {
            return Err(ValidationError::Missing(missing));
        }

        Ok(Self {
            name: Name::new(name).map_err(|err| ValidationError::Invalid {
                field: "name",
                reason: err.to_string(),
            })?,
            last_name: last_name.trim().to_string(),
            profile_name: profile_name.trim().to_string(),
            email: email.trim().to_string(),
        })
    }
}

#[derive(Deref, Display, From, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct CoachID(u32);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_coach_details_new() {
        assert_eq!(
            CoachDetails::new(" Dana ", "Reyes", "", " dana@example.org"),
            Ok(CoachDetails {
                name: Name::new("Dana").unwrap(),
                last_name: "Reyes".to_string(),
                profile_name: String::new(),
                email: "dana@example.org".to_string(),
            })
        );
        assert_eq!(
            CoachDetails::new("", "Reyes", "", " "),
            Err(ValidationError::Missing(vec!["name", "email"]))
        );
    }
}
