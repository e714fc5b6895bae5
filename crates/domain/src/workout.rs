use derive_more::{Deref, Display, From};

use crate::{
    ClientID, CoachID, CreateError, DeleteError, DerivedMetrics, ExerciseID, ReadError,
    TempoPhases, Unit, UpdateError, ValidationError, derive_metrics, format_decimal,
    parse_decimal,
};

#[allow(async_fn_in_trait)]
pub trait WorkoutService {
    async fn get_workouts(&self, client_id: Option<ClientID>) -> Result<Vec<Workout>, ReadError>;
    async fn get_workout(&self, id: WorkoutID) -> Result<Workout, ReadError>;
    async fn create_workout(&self, record: WorkoutRecord) -> Result<SavedWorkout, CreateError>;
    async fn replace_workout(
        &self,
        id: WorkoutID,
        record: WorkoutRecord,
    ) -> Result<Workout, UpdateError>;
    async fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError>;
}

#[allow(async_fn_in_trait)]
pub trait WorkoutRepository {
    async fn read_workouts(&self, client_id: Option<ClientID>) -> Result<Vec<Workout>, ReadError>;
    async fn read_workout(&self, id: WorkoutID) -> Result<Workout, ReadError>;
    async fn create_workout(&self, record: WorkoutRecord) -> Result<SavedWorkout, CreateError>;
    async fn replace_workout(
        &self,
        id: WorkoutID,
        record: WorkoutRecord,
    ) -> Result<Workout, UpdateError>;
    async fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: WorkoutID,
    pub record: WorkoutRecord,
}

/// A workout as acknowledged by the backend.
///
/// The id is `None` if the backend confirmed a creation without returning the stored workout.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedWorkout {
    pub id: Option<WorkoutID>,
    pub record: WorkoutRecord,
}

impl From<Workout> for SavedWorkout {
    fn from(value: Workout) -> Self {
        Self {
            id: Some(value.id),
            record: value.record,
        }
    }
}

#[derive(Deref, Display, From, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutID(u32);

/// A prescribed exercise for a client, as persisted by the backend.
///
/// Free-entry numbers are `None` if they were left empty or could not be parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutRecord {
    pub client_id: ClientID,
    pub coach_id: Option<CoachID>,
    pub exercise_id: ExerciseID,
    pub unit: Unit,
    pub one_rep_max: Option<f64>,
    pub percentage: Option<f64>,
    pub max_repetitions: Option<f64>,
    pub rir_repetitions: Option<f64>,
    pub concentric: Option<f64>,
    pub isometric_1: Option<f64>,
    pub eccentric: Option<f64>,
    pub isometric_2: Option<f64>,
    pub reps: Option<f64>,
    pub sets: Option<f64>,
    pub exercise_time: Option<f64>,
    pub rom: Option<f64>,
    pub weight: Option<f64>,
    pub repetitions: Option<f64>,
    pub metrics: DerivedMetrics,
}

/// The editable state of a workout form.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct WorkoutDraft {
    pub client_id: Option<ClientID>,
    pub coach_id: Option<CoachID>,
    pub exercise_id: Option<ExerciseID>,
    pub unit: Unit,
    pub one_rep_max: String,
    pub percentage: Option<u32>,
    pub max_repetitions: String,
    pub rir_repetitions: String,
    pub concentric: String,
    pub isometric_1: String,
    pub eccentric: String,
    pub isometric_2: String,
    pub reps: String,
    pub sets: String,
    pub exercise_time: String,
    pub rom: String,
    pub weight: String,
    pub repetitions: String,
}

impl WorkoutDraft {
    #[must_use]
    pub fn new(client_id: Option<ClientID>, coach_id: Option<CoachID>) -> Self {
        Self {
            client_id,
            coach_id,
            ..Self::default()
        }
    }

    /// Prefills a draft for editing an existing workout.
    #[must_use]
    pub fn from_record(record: &WorkoutRecord) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percentage = record
            .percentage
            .filter(|p| *p >= 0.0)
            .map(|p| p.round() as u32);
        Self {
            client_id: Some(record.client_id),
            coach_id: record.coach_id,
            exercise_id: Some(record.exercise_id),
            unit: record.unit,
            one_rep_max: format_decimal(record.one_rep_max),
            percentage,
            max_repetitions: format_decimal(record.max_repetitions),
            rir_repetitions: format_decimal(record.rir_repetitions),
            concentric: format_decimal(record.concentric),
            isometric_1: format_decimal(record.isometric_1),
            eccentric: format_decimal(record.eccentric),
            isometric_2: format_decimal(record.isometric_2),
            reps: format_decimal(record.reps),
            sets: format_decimal(record.sets),
            exercise_time: format_decimal(record.exercise_time),
            rom: format_decimal(record.rom),
            weight: format_decimal(record.weight),
            repetitions: format_decimal(record.repetitions),
        }
    }

    #[must_use]
    pub fn tempo(&self) -> TempoPhases {
        TempoPhases {
            concentric: parse_decimal(&self.concentric).unwrap_or_default(),
            isometric_1: parse_decimal(&self.isometric_1).unwrap_or_default(),
            eccentric: parse_decimal(&self.eccentric).unwrap_or_default(),
            isometric_2: parse_decimal(&self.isometric_2).unwrap_or_default(),
        }
    }

    #[must_use]
    pub fn metrics(&self) -> DerivedMetrics {
        derive_metrics(
            &self.tempo(),
            parse_decimal(&self.reps).unwrap_or_default(),
            parse_decimal(&self.sets).unwrap_or_default(),
            parse_decimal(&self.weight).unwrap_or_default(),
        )
    }

    /// Clears the 1RM, the selected percentage and the working weight.
    pub fn clear_intensity(&mut self) {
        self.one_rep_max.clear();
        self.clear_percentage();
    }

    /// Clears the selected percentage and the working weight derived from it.
    pub fn clear_percentage(&mut self) {
        self.percentage = None;
        self.weight.clear();
    }
}

/// Turns a draft into a record ready for submission.
///
/// Client and exercise are required. All derived metrics are computed from the draft.
pub fn assemble(draft: &WorkoutDraft) -> Result<WorkoutRecord, ValidationError> {
    let (client_id, exercise_id) = match (draft.client_id, draft.exercise_id) {
        (Some(client_id), Some(exercise_id)) => (client_id, exercise_id),
        (client_id, exercise_id) => {
            let mut missing = vec![];
            if client_id.is_none() {
                missing.push("client");
            }
            if exercise_id.is_none() {
                missing.push("exercise");
            }
            return Err(ValidationError::Missing(missing));
        }
    };

    Ok(WorkoutRecord {
        client_id,
        coach_id: draft.coach_id,
        exercise_id,
        unit: draft.unit,
        one_rep_max: parse_decimal(&draft.one_rep_max),
        percentage: draft.percentage.map(f64::from),
        max_repetitions: parse_decimal(&draft.max_repetitions),
        rir_repetitions: parse_decimal(&draft.rir_repetitions),
        concentric: parse_decimal(&draft.concentric),
        isometric_1: parse_decimal(&draft.isometric_1),
        eccentric: parse_decimal(&draft.eccentric),
        isometric_2: parse_decimal(&draft.isometric_2),
        reps: parse_decimal(&draft.reps),
        sets: parse_decimal(&draft.sets),
        exercise_time: parse_decimal(&draft.exercise_time),
        rom: parse_decimal(&draft.rom),
        weight: parse_decimal(&draft.weight),
        repetitions: parse_decimal(&draft.repetitions),
        metrics: draft.metrics(),
    })
}
