use derive_more::{Deref, Display, From};

use crate::{LoadCatalog, LoadEntry, Name, ReadError, Unit};

#[allow(async_fn_in_trait)]
pub trait ExerciseService {
    async fn get_exercises(&self) -> Result<Vec<Exercise>, ReadError>;
    async fn get_exercise(&self, id: ExerciseID) -> Result<Exercise, ReadError>;
    /// Fetches the loadable weights of an exercise and turns them into a catalog.
    async fn resolve_loads(&self, id: ExerciseID, unit: Unit) -> Result<LoadCatalog, ReadError>;
}

#[allow(async_fn_in_trait)]
pub trait ExerciseRepository {
    async fn read_exercises(&self) -> Result<Vec<Exercise>, ReadError>;
    async fn read_exercise(&self, id: ExerciseID) -> Result<Exercise, ReadError>;
    async fn read_loads(&self, id: ExerciseID, unit: Unit) -> Result<Vec<LoadEntry>, ReadError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: Name,
    pub load_type: Option<String>,
}

#[derive(Deref, Display, From, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(u32);
