//! REST
//!
//! The backend is the only data source. Responses are parsed leniently, as the backend is not
//! consistent in how it wraps entities and encodes numbers.

use std::str::FromStr;

use fitcoach_domain as domain;
use fitcoach_web_app::{SessionHandle, Settings};
use log::{debug, error};
use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use serde_json::{Value, json};
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: Method,
    /// Path relative to the API base, including the query.
    pub path: String,
    pub token: Option<String>,
    pub body: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(thiserror::Error, Debug)]
#[error("{0}")]
pub struct TransportError(String);

#[allow(async_fn_in_trait)]
pub trait SendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, TransportError>;
}

pub struct ReqwestSendRequest {
    client: reqwest::Client,
    base: Url,
}

impl ReqwestSendRequest {
    #[must_use]
    pub fn new(base: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            base,
        }
    }
}

impl SendRequest for ReqwestSendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, TransportError> {
        let url = format!("{}{}", self.base.as_str().trim_end_matches('/'), request.path);
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, url);
        if let Some(token) = request.token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = request.body {
            builder = builder.json(&body);
        }

        let response = builder
            .send()
            .await
            .map_err(|err| TransportError(err.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|err| TransportError(err.to_string()))?;

        Ok(Response { status, body })
    }
}

/// Requests are authenticated with the token of the session behind `session`. The adapter
/// never changes the session itself.
pub struct REST<S: SendRequest> {
    pub sender: S,
    session: SessionHandle,
}

impl REST<ReqwestSendRequest> {
    #[must_use]
    pub fn new(settings: &Settings, session: SessionHandle) -> Self {
        Self::with_sender(ReqwestSendRequest::new(settings.api_base.clone()), session)
    }
}

impl<S: SendRequest> REST<S> {
    pub fn with_sender(sender: S, session: SessionHandle) -> Self {
        Self { sender, session }
    }

    async fn send(
        &self,
        method: Method,
        path: String,
        token: Option<&domain::Token>,
        body: Option<Value>,
    ) -> Result<Value, domain::StorageError> {
        let request = Request {
            method,
            path,
            token: token.map(|token| token.as_str().to_string()),
            body,
        };
        let response = self.sender.send_request(request).await.map_err(|err| {
            debug!("request failed: {err}");
            domain::StorageError::NoConnection
        })?;

        if !response.is_success() {
            return Err(domain::StorageError::Status {
                status: response.status,
                message: error_message(&response),
            });
        }

        Ok(parse_body(&response.body))
    }

    async fn fetch(
        &self,
        method: Method,
        path: String,
        body: Option<Value>,
    ) -> Result<Value, domain::StorageError> {
        let Some(token) = self.session.token() else {
            return Err(domain::StorageError::NoSession);
        };
        self.send(method, path, Some(&token), body).await
    }
}

impl<S: SendRequest> domain::SessionRepository for REST<S> {
    async fn login(&self, email: &str, password: &str) -> Result<domain::Session, domain::ReadError> {
        let response = self
            .send(
                Method::Post,
                "/coaches/login".to_string(),
                None,
                Some(json!({ "email": email, "password": password })),
            )
            .await?;
        let token = extract_token(&response).ok_or_else(|| {
            domain::StorageError::Other("Invalid login response (no token)".into())
        })?;

        let profile = self
            .send(Method::Get, "/coaches/me".to_string(), Some(&token), None)
            .await?;
        let coach = decode_one::<Coach, domain::Coach>(extract_profile(profile), "profile")?;

        Ok(domain::Session { token, coach })
    }

    /// The backend keeps no server-side session, so there is nothing to end remotely.
    async fn logout(&self) -> Result<(), domain::DeleteError> {
        Ok(())
    }
}

impl<S: SendRequest> domain::CoachRepository for REST<S> {
    async fn read_profile(&self) -> Result<domain::Coach, domain::ReadError> {
        let profile = self
            .fetch(Method::Get, "/coaches/me".to_string(), None)
            .await?;
        Ok(decode_one::<Coach, domain::Coach>(
            extract_profile(profile),
            "profile",
        )?)
    }

    async fn create_coach(
        &self,
        details: domain::CoachDetails,
        password: &str,
    ) -> Result<domain::Coach, domain::CreateError> {
        let payload = json!(Coach::from(details));
        let mut body = payload.clone();
        if let Value::Object(ref mut body) = body {
            body.insert("password".to_string(), json!(password));
        }
        let token = self.session.token();
        let response = self
            .send(
                Method::Post,
                "/coaches/".to_string(),
                token.as_ref(),
                Some(body),
            )
            .await?;
        Ok(decode_one::<Coach, domain::Coach>(
            merge(payload, unwrap_entity(response, "coach")),
            "coach",
        )?)
    }

    async fn replace_coach(
        &self,
        coach: domain::Coach,
    ) -> Result<domain::Coach, domain::UpdateError> {
        let payload = json!(Coach::from(coach.details));
        let response = self
            .fetch(
                Method::Put,
                format!("/coaches/{}", coach.id),
                Some(payload.clone()),
            )
            .await?;
        Ok(decode_one::<Coach, domain::Coach>(
            with_id(merge(payload, unwrap_entity(response, "coach")), *coach.id),
            "coach",
        )?)
    }

    async fn read_clients_of(
        &self,
        id: domain::CoachID,
    ) -> Result<Vec<domain::Client>, domain::ReadError> {
        let response = self
            .fetch(Method::Get, format!("/coaches/{id}/clients"), None)
            .await
            .map_err(read_error)?;
        Ok(decode_all::<Client, domain::Client>(
            unwrap_list(response, "clients"),
            "client",
        ))
    }
}

impl<S: SendRequest> domain::ClientRepository for REST<S> {
    async fn read_clients(&self) -> Result<Vec<domain::Client>, domain::ReadError> {
        let response = self
            .fetch(Method::Get, "/clients/".to_string(), None)
            .await?;
        Ok(decode_all::<Client, domain::Client>(
            unwrap_list(response, "clients"),
            "client",
        ))
    }

    async fn read_client(&self, id: domain::ClientID) -> Result<domain::Client, domain::ReadError> {
        let response = self
            .fetch(Method::Get, format!("/clients/{id}"), None)
            .await
            .map_err(read_error)?;
        Ok(decode_one::<Client, domain::Client>(
            unwrap_entity(response, "client"),
            "client",
        )?)
    }

    async fn create_client(
        &self,
        coach_id: domain::CoachID,
        details: domain::ClientDetails,
    ) -> Result<domain::Client, domain::CreateError> {
        let payload = json!(Client::new(None, coach_id, details));
        let response = self
            .fetch(Method::Post, "/clients/".to_string(), Some(payload.clone()))
            .await?;
        Ok(decode_one::<Client, domain::Client>(
            merge(payload, unwrap_entity(response, "client")),
            "client",
        )?)
    }

    async fn replace_client(
        &self,
        client: domain::Client,
    ) -> Result<domain::Client, domain::UpdateError> {
        let id = client.id;
        let payload = json!(Client::new(None, client.coach_id, client.details));
        let response = self
            .fetch(Method::Put, format!("/clients/{id}"), Some(payload.clone()))
            .await?;
        Ok(decode_one::<Client, domain::Client>(
            with_id(merge(payload, unwrap_entity(response, "client")), *id),
            "client",
        )?)
    }

    async fn delete_client(
        &self,
        id: domain::ClientID,
    ) -> Result<domain::ClientID, domain::DeleteError> {
        self.fetch(Method::Delete, format!("/clients/{id}"), None)
            .await?;
        Ok(id)
    }
}

impl<S: SendRequest> domain::ExerciseRepository for REST<S> {
    async fn read_exercises(&self) -> Result<Vec<domain::Exercise>, domain::ReadError> {
        let response = self
            .fetch(Method::Get, "/exercises/".to_string(), None)
            .await?;
        Ok(decode_all::<Exercise, domain::Exercise>(
            unwrap_list(response, "exercises"),
            "exercise",
        ))
    }

    async fn read_exercise(
        &self,
        id: domain::ExerciseID,
    ) -> Result<domain::Exercise, domain::ReadError> {
        let response = self
            .fetch(Method::Get, format!("/exercises/{id}"), None)
            .await
            .map_err(read_error)?;
        Ok(decode_one::<Exercise, domain::Exercise>(
            unwrap_entity(response, "exercise"),
            "exercise",
        )?)
    }

    async fn read_loads(
        &self,
        id: domain::ExerciseID,
        unit: domain::Unit,
    ) -> Result<Vec<domain::LoadEntry>, domain::ReadError> {
        let response = self
            .fetch(
                Method::Get,
                format!("/exercises/{id}/weights?unit={unit}"),
                None,
            )
            .await
            .map_err(read_error)?;
        let Value::Array(rows) = response else {
            debug!("no load rows for exercise {id} in {unit}");
            return Ok(vec![]);
        };

        Ok(rows
            .into_iter()
            .filter_map(|row| {
                let value = serde_json::from_value::<LoadRow>(row).ok()?.value?;
                match domain::LoadEntry::new(value, unit) {
                    Ok(entry) => Some(entry),
                    Err(err) => {
                        debug!("skipping load of exercise {id}: {err}");
                        None
                    }
                }
            })
            .collect())
    }
}

impl<S: SendRequest> domain::WorkoutRepository for REST<S> {
    async fn read_workouts(
        &self,
        client_id: Option<domain::ClientID>,
    ) -> Result<Vec<domain::Workout>, domain::ReadError> {
        let path = match client_id {
            Some(client_id) => format!("/workouts/?client_id={client_id}"),
            None => "/workouts/".to_string(),
        };
        let response = self.fetch(Method::Get, path, None).await?;
        Ok(decode_all::<Workout, domain::Workout>(
            unwrap_list(response, "workouts"),
            "workout",
        ))
    }

    async fn read_workout(
        &self,
        id: domain::WorkoutID,
    ) -> Result<domain::Workout, domain::ReadError> {
        let response = self
            .fetch(Method::Get, format!("/workouts/{id}"), None)
            .await
            .map_err(read_error)?;
        Ok(decode_one::<Workout, domain::Workout>(
            unwrap_entity(response, "workout"),
            "workout",
        )?)
    }

    /// A success response that does not contain the stored workout yields the submitted record
    /// without id.
    async fn create_workout(
        &self,
        record: domain::WorkoutRecord,
    ) -> Result<domain::SavedWorkout, domain::CreateError> {
        let payload = json!(Workout::from(&record));
        let response = self
            .fetch(Method::Post, "/workouts/".to_string(), Some(payload.clone()))
            .await?;
        Ok(decode_one::<Workout, domain::SavedWorkout>(
            merge(payload, unwrap_entity(response, "workout")),
            "workout",
        )?)
    }

    async fn replace_workout(
        &self,
        id: domain::WorkoutID,
        record: domain::WorkoutRecord,
    ) -> Result<domain::Workout, domain::UpdateError> {
        let payload = json!(Workout::from(&record));
        let response = self
            .fetch(Method::Put, format!("/workouts/{id}"), Some(payload.clone()))
            .await?;
        Ok(decode_one::<Workout, domain::Workout>(
            with_id(merge(payload, unwrap_entity(response, "workout")), *id),
            "workout",
        )?)
    }

    async fn delete_workout(
        &self,
        id: domain::WorkoutID,
    ) -> Result<domain::WorkoutID, domain::DeleteError> {
        self.fetch(Method::Delete, format!("/workouts/{id}"), None)
            .await?;
        Ok(id)
    }
}

fn parse_body(body: &str) -> Value {
    if body.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}

fn error_message(response: &Response) -> String {
    serde_json::from_str::<Value>(&response.body)
        .ok()
        .and_then(|body| {
            ["error", "message"]
                .iter()
                .filter_map(|key| body.get(key).and_then(Value::as_str))
                .map(str::trim)
                .find(|message| !message.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| format!("HTTP {}", response.status))
}

fn read_error(err: domain::StorageError) -> domain::ReadError {
    match err {
        domain::StorageError::Status { status: 404, .. } => domain::ReadError::NotFound,
        err => domain::ReadError::Storage(err),
    }
}

fn extract_token(body: &Value) -> Option<domain::Token> {
    let body = match body {
        Value::String(text) => serde_json::from_str(text).unwrap_or_default(),
        body => body.clone(),
    };
    [
        "/token",
        "/access_token",
        "/jwt",
        "/id_token",
        "/data/token",
        "/data/access_token",
    ]
    .iter()
    .filter_map(|pointer| body.pointer(pointer).and_then(Value::as_str))
    .find_map(domain::Token::new)
}

fn extract_profile(body: Value) -> Value {
    let mut profile = match body {
        Value::Array(items) => items.into_iter().next().unwrap_or_default(),
        Value::Object(mut body) => ["coach", "user", "data"]
            .iter()
            .find_map(|key| body.remove(*key).filter(Value::is_object))
            .unwrap_or(Value::Object(body)),
        body => body,
    };
    if let Value::Object(ref mut profile) = profile {
        if !profile.contains_key("id") {
            if let Some(id) = profile.get("coach_id").cloned() {
                profile.insert("id".to_string(), id);
            }
        }
    }
    profile
}

fn unwrap_entity(body: Value, key: &str) -> Value {
    match body {
        Value::Object(mut body) if body.get(key).is_some_and(Value::is_object) => {
            body.remove(key).unwrap_or_default()
        }
        body => body,
    }
}

fn unwrap_list(body: Value, key: &str) -> Vec<Value> {
    match body {
        Value::Array(items) => items,
        Value::Object(mut body) => match body.remove(key) {
            Some(Value::Array(items)) => items,
            _ => vec![],
        },
        _ => vec![],
    }
}

/// Completes the submitted payload with the fields of the response.
fn merge(payload: Value, response: Value) -> Value {
    match (payload, response) {
        (Value::Object(mut payload), Value::Object(response)) => {
            payload.extend(response);
            Value::Object(payload)
        }
        (payload, _) => payload,
    }
}

fn with_id(mut body: Value, id: u32) -> Value {
    if let Value::Object(ref mut body) = body {
        body.insert("id".to_string(), json!(id));
    }
    body
}

fn decode<D, T>(value: Value) -> Result<T, String>
where
    D: DeserializeOwned,
    T: TryFrom<D, Error = String>,
{
    let dto = serde_json::from_value::<D>(value)
        .map_err(|err| format!("deserialization failed: {err}"))?;
    T::try_from(dto)
}

fn decode_one<D, T>(value: Value, entity: &str) -> Result<T, domain::StorageError>
where
    D: DeserializeOwned,
    T: TryFrom<D, Error = String>,
{
    decode::<D, T>(value)
        .map_err(|err| domain::StorageError::Other(format!("invalid {entity}: {err}").into()))
}

fn decode_all<D, T>(values: Vec<Value>, entity: &str) -> Vec<T>
where
    D: DeserializeOwned,
    T: TryFrom<D, Error = String>,
{
    values
        .into_iter()
        .filter_map(|value| match decode::<D, T>(value) {
            Ok(item) => Some(item),
            Err(err) => {
                error!("skipping invalid {entity}: {err}");
                None
            }
        })
        .collect()
}

fn lenient_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(number)) => number.as_u64().and_then(|n| u32::try_from(n).ok()),
        Some(Value::String(text)) => text.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => domain::parse_decimal(&text),
        _ => None,
    })
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(text)) => text,
        Some(Value::Number(number)) => number.to_string(),
        _ => String::new(),
    })
}

fn name(value: &str, field: &str) -> Result<domain::Name, String> {
    domain::Name::new(value).map_err(|err| format!("{field}: {err}"))
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct Coach {
    #[serde(
        default,
        deserialize_with = "lenient_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<u32>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub last_name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub profile_name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: String,
}

impl From<domain::CoachDetails> for Coach {
    fn from(value: domain::CoachDetails) -> Self {
        Self {
            id: None,
            name: value.name.into(),
            last_name: value.last_name,
            profile_name: value.profile_name,
            email: value.email,
        }
    }
}

impl From<domain::Coach> for Coach {
    fn from(value: domain::Coach) -> Self {
        Self {
            id: Some(*value.id),
            ..Self::from(value.details)
        }
    }
}

impl TryFrom<Coach> for domain::Coach {
    type Error = String;

    fn try_from(value: Coach) -> Result<Self, Self::Error> {
        Ok(domain::Coach {
            id: value.id.ok_or("coach without id")?.into(),
            details: domain::CoachDetails {
                name: name(&value.name, "name")?,
                last_name: value.last_name,
                profile_name: value.profile_name,
                email: value.email,
            },
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct Client {
    #[serde(
        default,
        deserialize_with = "lenient_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<u32>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub coach_id: Option<u32>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub last_name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub profile_name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub phone: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub city: String,
}

impl Client {
    fn new(
        id: Option<domain::ClientID>,
        coach_id: domain::CoachID,
        details: domain::ClientDetails,
    ) -> Self {
        Self {
            id: id.map(|id| *id),
            coach_id: Some(*coach_id),
            name: details.name.into(),
            last_name: details.last_name.into(),
            profile_name: details.profile_name,
            phone: details.phone,
            email: details.email,
            city: details.city,
        }
    }
}

impl From<domain::Client> for Client {
    fn from(value: domain::Client) -> Self {
        Self::new(Some(value.id), value.coach_id, value.details)
    }
}

impl TryFrom<Client> for domain::Client {
    type Error = String;

    fn try_from(value: Client) -> Result<Self, Self::Error> {
        Ok(domain::Client {
            id: value.id.ok_or("client without id")?.into(),
            coach_id: value.coach_id.ok_or("client without coach")?.into(),
            details: domain::ClientDetails {
                name: name(&value.name, "name")?,
                last_name: name(&value.last_name, "last name")?,
                profile_name: value.profile_name,
                phone: value.phone,
                email: value.email,
                city: value.city,
            },
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct Exercise {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<u32>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default)]
    pub load_type: Option<String>,
}

impl From<domain::Exercise> for Exercise {
    fn from(value: domain::Exercise) -> Self {
        Self {
            id: Some(*value.id),
            name: value.name.into(),
            load_type: value.load_type,
        }
    }
}

impl TryFrom<Exercise> for domain::Exercise {
    type Error = String;

    fn try_from(value: Exercise) -> Result<Self, Self::Error> {
        Ok(domain::Exercise {
            id: value.id.ok_or("exercise without id")?.into(),
            name: name(&value.name, "name")?,
            load_type: value.load_type.filter(|load_type| !load_type.is_empty()),
        })
    }
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
struct LoadRow {
    #[serde(default, deserialize_with = "lenient_number")]
    value: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct Workout {
    #[serde(
        default,
        deserialize_with = "lenient_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<u32>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub client_id: Option<u32>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub coach_id: Option<u32>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub exercise_id: Option<u32>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub units: String,
    #[serde(default, deserialize_with = "lenient_number")]
    pub rm: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub rm_percentage: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub max_repetitions: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub rir_repetitions: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub cc_tempo: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub iso_tempo_one: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub ecc_tempo: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub iso_tempo_two: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub reps: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub sets: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub exercise_time: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub rom: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub weight: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub repetitions: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub total_tempo: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub tut: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub total_rest: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub density: Option<f64>,
}

impl From<&domain::WorkoutRecord> for Workout {
    fn from(value: &domain::WorkoutRecord) -> Self {
        Self {
            id: None,
            client_id: Some(*value.client_id),
            coach_id: value.coach_id.map(|id| *id),
            exercise_id: Some(*value.exercise_id),
            units: value.unit.as_str().to_string(),
            rm: value.one_rep_max,
            rm_percentage: value.percentage,
            max_repetitions: value.max_repetitions,
            rir_repetitions: value.rir_repetitions,
            cc_tempo: value.concentric,
            iso_tempo_one: value.isometric_1,
            ecc_tempo: value.eccentric,
            iso_tempo_two: value.isometric_2,
            reps: value.reps,
            sets: value.sets,
            exercise_time: value.exercise_time,
            rom: value.rom,
            weight: value.weight,
            repetitions: value.repetitions,
            total_tempo: Some(value.metrics.total_tempo),
            tut: Some(value.metrics.time_under_tension),
            total_rest: Some(value.metrics.total_rest),
            density: value.metrics.density,
        }
    }
}

impl From<&domain::Workout> for Workout {
    fn from(value: &domain::Workout) -> Self {
        Self {
            id: Some(*value.id),
            ..Self::from(&value.record)
        }
    }
}

impl TryFrom<Workout> for domain::Workout {
    type Error = String;

    fn try_from(value: Workout) -> Result<Self, Self::Error> {
        let saved = domain::SavedWorkout::try_from(value)?;
        Ok(domain::Workout {
            id: saved.id.ok_or("workout without id")?,
            record: saved.record,
        })
    }
}

impl TryFrom<Workout> for domain::SavedWorkout {
    type Error = String;

    /// The persisted metrics are ignored and derived again from the persisted inputs.
    fn try_from(value: Workout) -> Result<Self, Self::Error> {
        let unit = match value.units.trim() {
            "" => domain::Unit::default(),
            unit => domain::Unit::from_str(unit).map_err(|_| format!("invalid unit {unit:?}"))?,
        };
        let tempo = domain::TempoPhases {
            concentric: value.cc_tempo.unwrap_or_default(),
            isometric_1: value.iso_tempo_one.unwrap_or_default(),
            eccentric: value.ecc_tempo.unwrap_or_default(),
            isometric_2: value.iso_tempo_two.unwrap_or_default(),
        };
        let metrics = domain::derive_metrics(
            &tempo,
            value.reps.unwrap_or_default(),
            value.sets.unwrap_or_default(),
            value.weight.unwrap_or_default(),
        );

        Ok(domain::SavedWorkout {
            id: value.id.map(domain::WorkoutID::from),
            record: domain::WorkoutRecord {
                client_id: value.client_id.ok_or("workout without client")?.into(),
                coach_id: value.coach_id.map(domain::CoachID::from),
                exercise_id: value.exercise_id.ok_or("workout without exercise")?.into(),
                unit,
                one_rep_max: value.rm,
                percentage: value.rm_percentage,
                max_repetitions: value.max_repetitions,
                rir_repetitions: value.rir_repetitions,
                concentric: value.cc_tempo,
                isometric_1: value.iso_tempo_one,
                eccentric: value.ecc_tempo,
                isometric_2: value.iso_tempo_two,
                reps: value.reps,
                sets: value.sets,
                exercise_time: value.exercise_time,
                rom: value.rom,
                weight: value.weight,
                repetitions: value.repetitions,
                metrics,
            },
        })
    }
}
