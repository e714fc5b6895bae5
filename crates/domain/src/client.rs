use derive_more::{Deref, Display, From};

use crate::{
    CoachID, CreateError, DeleteError, Name, NameError, ReadError, UpdateError, ValidationError,
};

#[allow(async_fn_in_trait)]
pub trait ClientService {
    async fn get_clients(&self) -> Result<Vec<Client>, ReadError>;
    async fn get_client(&self, id: ClientID) -> Result<Client, ReadError>;
    async fn create_client(
        &self,
        coach_id: CoachID,
        details: ClientDetails,
    ) -> Result<Client, CreateError>;
    async fn replace_client(&self, client: Client) -> Result<Client, UpdateError>;
    async fn delete_client(&self, id: ClientID) -> Result<ClientID, DeleteError>;
}

#[allow(async_fn_in_trait)]
pub trait ClientRepository {
    async fn read_clients(&self) -> Result<Vec<Client>, ReadError>;
    async fn read_client(&self, id: ClientID) -> Result<Client, ReadError>;
    async fn create_client(
        &self,
        coach_id: CoachID,
        details: ClientDetails,
    ) -> Result<Client, CreateError>;
    async fn replace_client(&self, client: Client) -> Result<Client, UpdateError>;
    async fn delete_client(&self, id: ClientID) -> Result<ClientID, DeleteError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub id: ClientID,
    pub coach_id: CoachID,
    pub details: ClientDetails,
}

impl Client {
    /// The profile name if set, otherwise the full name.
    #[must_use]
    pub fn display_name(&self) -> String {
        let profile_name = self.details.profile_name.trim();
        if profile_name.is_empty() {
            self.full_name()
        } else {
            profile_name.to_string()
        }
    }

    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.details.name, self.details.last_name)
    }

    /// Case-insensitive match against the full name, or a substring match against the name
    /// fields and the email address.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return false;
        }
        if self.full_name().to_lowercase() == needle {
            return true;
        }
        [
            self.details.name.as_str(),
            self.details.last_name.as_str(),
            self.details.email.as_str(),
            self.details.profile_name.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Position of the first client matching the query.
#[must_use]
pub fn find_client(clients: &[Client], query: &str) -> Option<usize> {
    clients.iter().position(|c| c.matches(query))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientDetails {
    pub name: Name,
    pub last_name: Name,
    pub profile_name: String,
    pub phone: String,
    pub email: String,
    pub city: String,
}

impl ClientDetails {
    pub fn new(
        name: &str,
        last_name: &str,
        profile_name: &str,
        phone: &str,
        email: &str,
        city: &str,
    ) -> Result<Self, ValidationError> {
        let missing = [("name", name), ("last name", last_name), ("email", email)]
            .into_iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(field, _)| field)
            .collect::<Vec<_>>();
        if !missing.is_empty() {
            return Err(ValidationError::Missing(missing));
        }

        Ok(Self {
            name: Name::new(name).map_err(invalid("name"))?,
            last_name: Name::new(last_name).map_err(invalid("last name"))?,
            profile_name: profile_name.trim().to_string(),
            phone: phone.trim().to_string(),
            email: email.trim().to_string(),
            city: city.trim().to_string(),
        })
    }
}

fn invalid(field: &'static str) -> impl Fn(NameError) -> ValidationError {
    move |err| ValidationError::Invalid {
        field,
        reason: err.to_string(),
    }
}

#[derive(Deref, Display, From, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClientID(u32);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn client(id: u32, name: &str, last_name: &str, profile_name: &str, email: &str) -> Client {
        Client {
            id: id.into(),
            coach_id: 1.into(),
            details: ClientDetails::new(name, last_name, profile_name, "", email, "").unwrap(),
        }
    }

    #[test]
    fn test_client_details_new() {
        assert_eq!(
            ClientDetails::new(" Ana ", "Silva", "", "555 0100", "ana@example.org ", "Porto"),
            Ok(ClientDetails {
                name: Name::new("Ana").unwrap(),
                last_name: Name::new("Silva").unwrap(),
                profile_name: String::new(),
                phone: "555 0100".to_string(),
                email: "ana@example.org".to_string(),
                city: "Porto".to_string(),
            })
        );
    }

    #[rstest]
    #[case("", "Silva", "a@b.c", vec!["name"])]
    #[case("Ana", " ", "a@b.c", vec!["last name"])]
    #[case("", "", "", vec!["name", "last name", "email"])]
    fn test_client_details_new_missing(
        #[case] name: &str,
        #[case] last_name: &str,
        #[case] email: &str,
        #[case] expected: Vec<&'static str>,
    ) {
        assert_eq!(
            ClientDetails::new(name, last_name, "", "", email, ""),
            Err(ValidationError::Missing(expected))
        );
    }

    #[test]
    fn test_client_details_new_too_long() {
        assert!(matches!(
            ClientDetails::new(&"x".repeat(70), "Silva", "", "", "a@b.c", ""),
            Err(ValidationError::Invalid { field: "name", .. })
        ));
    }

    #[rstest]
    #[case(client(1, "Ana", "Silva", "", "ana@example.org"), "Ana Silva")]
    #[case(client(1, "Ana", "Silva", "  ", "ana@example.org"), "Ana Silva")]
    #[case(client(1, "Ana", "Silva", "Ani", "ana@example.org"), "Ani")]
    fn test_client_display_name(#[case] client: Client, #[case] expected: &str) {
        assert_eq!(client.display_name(), expected);
    }

    #[rstest]
    #[case("ana silva", Some(1))]
    #[case("SILVA", Some(1))]
    #[case("@example.net", Some(2))]
    #[case("the rock", Some(2))]
    #[case("nobody", None)]
    #[case("  ", None)]
    fn test_find_client(#[case] query: &str, #[case] expected: Option<usize>) {
        let clients = vec![
            client(1, "Bo", "Berg", "", "bo@example.org"),
            client(2, "Ana", "Silva", "", "ana@example.org"),
            client(3, "Dwayne", "Johnson", "The Rock", "dj@example.net"),
        ];
        assert_eq!(find_client(&clients, query), expected);
    }
}
