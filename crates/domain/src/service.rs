use log::{debug, error};

use crate::{
    Client, ClientDetails, ClientID, ClientRepository, ClientService, Coach, CoachDetails,
    CoachID, CoachRepository, CoachService, CreateError, DeleteError, Exercise, ExerciseID,
    ExerciseRepository, ExerciseService, LoadCatalog, ReadError, SavedWorkout, Session,
    SessionRepository, SessionService, Unit, UpdateError, Workout, WorkoutID, WorkoutRecord,
    WorkoutRepository, WorkoutService,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: SessionRepository> SessionService for Service<R> {
    async fn login(&self, email: &str, password: &str) -> Result<Session, ReadError> {
        log_on_error!(
            self.repository.login(email, password),
            ReadError,
            "log in",
            "coach"
        )
    }

    async fn logout(&self) -> Result<(), DeleteError> {
        log_on_error!(self.repository.logout(), DeleteError, "delete", "session")
    }
}

impl<R: CoachRepository> CoachService for Service<R> {
    async fn get_profile(&self) -> Result<Coach, ReadError> {
        log_on_error!(
            self.repository.read_profile(),
            ReadError,
            "get",
            "coach profile"
        )
    }

    async fn create_coach(
        &self,
        details: CoachDetails,
        password: &str,
    ) -> Result<Coach, CreateError> {
        log_on_error!(
            self.repository.create_coach(details, password),
            CreateError,
            "create",
            "coach"
        )
    }

    async fn replace_coach(&self, coach: Coach) -> Result<Coach, UpdateError> {
        log_on_error!(
            self.repository.replace_coach(coach),
            UpdateError,
            "replace",
            "coach"
        )
    }

    async fn get_clients_of(&self, id: CoachID) -> Result<Vec<Client>, ReadError> {
        log_on_error!(
            self.repository.read_clients_of(id),
            ReadError,
            "get",
            "clients of coach"
        )
    }
}

impl<R: ClientRepository> ClientService for Service<R> {
    async fn get_clients(&self) -> Result<Vec<Client>, ReadError> {
        log_on_error!(self.repository.read_clients(), ReadError, "get", "clients")
    }

    async fn get_client(&self, id: ClientID) -> Result<Client, ReadError> {
        log_on_error!(self.repository.read_client(id), ReadError, "get", "client")
    }

    async fn create_client(
        &self,
        coach_id: CoachID,
        details: ClientDetails,
    ) -> Result<Client, CreateError> {
        log_on_error!(
            self.repository.create_client(coach_id, details),
            CreateError,
            "create",
            "client"
        )
    }

    async fn replace_client(&self, client: Client) -> Result<Client, UpdateError> {
        log_on_error!(
            self.repository.replace_client(client),
            UpdateError,
            "replace",
            "client"
        )
    }

    async fn delete_client(&self, id: ClientID) -> Result<ClientID, DeleteError> {
        log_on_error!(
            self.repository.delete_client(id),
            DeleteError,
            "delete",
            "client"
        )
    }
}

impl<R: ExerciseRepository> ExerciseService for Service<R> {
    async fn get_exercises(&self) -> Result<Vec<Exercise>, ReadError> {
        log_on_error!(
            self.repository.read_exercises(),
            ReadError,
            "get",
            "exercises"
        )
    }

    async fn get_exercise(&self, id: ExerciseID) -> Result<Exercise, ReadError> {
        log_on_error!(
            self.repository.read_exercise(id),
            ReadError,
            "get",
            "exercise"
        )
    }

    async fn resolve_loads(&self, id: ExerciseID, unit: Unit) -> Result<LoadCatalog, ReadError> {
        let entries = log_on_error!(
            self.repository.read_loads(id, unit),
            ReadError,
            "get",
            "loads"
        )?;
        let catalog = LoadCatalog::new(entries);
        debug!(
            "resolved {} loads for exercise {id} in {unit}",
            catalog.len()
        );
        Ok(catalog)
    }
}

impl<R: WorkoutRepository> WorkoutService for Service<R> {
    async fn get_workouts(&self, client_id: Option<ClientID>) -> Result<Vec<Workout>, ReadError> {
        log_on_error!(
            self.repository.read_workouts(client_id),
            ReadError,
            "get",
            "workouts"
        )
    }

    async fn get_workout(&self, id: WorkoutID) -> Result<Workout, ReadError> {
        log_on_error!(
            self.repository.read_workout(id),
            ReadError,
            "get",
            "workout"
        )
    }

    async fn create_workout(
        &self,
        record: WorkoutRecord,
    ) -> Result<SavedWorkout, CreateError> {
        log_on_error!(
            self.repository.create_workout(record),
            CreateError,
            "create",
            "workout"
        )
    }

    async fn replace_workout(
        &self,
        id: WorkoutID,
        record: WorkoutRecord,
    ) -> Result<Workout, UpdateError> {
        log_on_error!(
            self.repository.replace_workout(id, record),
            UpdateError,
            "replace",
            "workout"
        )
    }

    async fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError> {
        log_on_error!(
            self.repository.delete_workout(id),
            DeleteError,
            "delete",
            "workout"
        )
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{LoadEntry, Name, StorageError};

    struct FakeRepository {
        loads: RefCell<Option<Result<Vec<LoadEntry>, ReadError>>>,
        requests: RefCell<Vec<(ExerciseID, Unit)>>,
    }

    impl FakeRepository {
        fn with_loads(loads: Result<Vec<LoadEntry>, ReadError>) -> Self {
            Self {
                loads: RefCell::new(Some(loads)),
                requests: RefCell::new(vec![]),
            }
        }
    }

    impl ExerciseRepository for FakeRepository {
        async fn read_exercises(&self) -> Result<Vec<Exercise>, ReadError> {
            Ok(vec![Exercise {
                id: 1.into(),
                name: Name::new("Back Squat").unwrap(),
                load_type: None,
            }])
        }

        async fn read_exercise(&self, id: ExerciseID) -> Result<Exercise, ReadError> {
            if *id == 1 {
                Ok(self.read_exercises().await?.remove(0))
            } else {
                Err(ReadError::NotFound)
            }
        }

        async fn read_loads(
            &self,
            id: ExerciseID,
            unit: Unit,
        ) -> Result<Vec<LoadEntry>, ReadError> {
            self.requests.borrow_mut().push((id, unit));
            self.loads
                .borrow_mut()
                .take()
                .unwrap_or(Err(ReadError::Storage(StorageError::NoConnection)))
        }
    }

    fn lbs(value: f64) -> LoadEntry {
        LoadEntry::new(value, Unit::Lbs).unwrap()
    }

    #[tokio::test]
    async fn test_resolve_loads() {
        let service = Service::new(FakeRepository::with_loads(Ok(vec![
            lbs(45.0),
            lbs(25.0),
            lbs(45.0),
            lbs(10.0),
        ])));

        let catalog = service.resolve_loads(4.into(), Unit::Lbs).await.unwrap();

        assert_eq!(*catalog, vec![lbs(10.0), lbs(25.0), lbs(45.0)]);
        assert_eq!(
            *service.repository().requests.borrow(),
            vec![(4.into(), Unit::Lbs)]
        );
    }

    #[tokio::test]
    async fn test_resolve_loads_error() {
        let service = Service::new(FakeRepository::with_loads(Err(ReadError::Storage(
            StorageError::Status {
                status: 404,
                message: "exercise not found".to_string(),
            },
        ))));

        assert!(matches!(
            service.resolve_loads(4.into(), Unit::Kg).await,
            Err(ReadError::Storage(StorageError::Status { status: 404, .. }))
        ));
    }

    #[tokio::test]
    async fn test_get_exercise() {
        let service = Service::new(FakeRepository::with_loads(Ok(vec![])));

        assert_eq!(
            service.get_exercise(1.into()).await.unwrap().name.as_str(),
            "Back Squat"
        );
        assert!(matches!(
            service.get_exercise(2.into()).await,
            Err(ReadError::NotFound)
        ));
    }
}
