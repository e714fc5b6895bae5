//! Workout form
//!
//! Holds the draft of a workout while a coach edits it. Every mutation explicitly re-runs the
//! affected derivations of the domain engine, so the derived values are always consistent with
//! the inputs:
//!
//! - a change of exercise or unit discards the load catalog and requests a new one,
//! - a change of the catalog or the 1RM recomputes the achievable %1RM options,
//! - a change of tempo, reps, sets or weight recomputes the density metrics.
//!
//! Requests to the backend are not made by the form itself. The form hands out a request
//! describing what is needed, and accepts the response later. Catalog responses carry the
//! generation of the request they answer, so a response that was superseded by a newer request
//! is discarded.

use chrono::{DateTime, TimeDelta, Utc};
use fitcoach_domain::{
    ClientID, CoachID, DerivedMetrics, ExerciseID, ExerciseService, LoadCatalog, PercentOption,
    ReadError, SavedWorkout, Unit, ValidationError, Workout, WorkoutDraft, WorkoutID,
    WorkoutRecord, WorkoutService, assemble, derive_percent_options, format_decimal, parse_decimal,
    selected_option,
};
use log::{debug, warn};

use crate::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Create,
    Edit(WorkoutID),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogStatus {
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Submitting,
    Success {
        message: String,
        since: DateTime<Utc>,
    },
    Error(String),
}

/// Free-entry fields that do not affect the load catalog or the %1RM options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    MaxRepetitions,
    RirRepetitions,
    Concentric,
    Isometric1,
    Eccentric,
    Isometric2,
    Reps,
    Sets,
    ExerciseTime,
    Rom,
    Weight,
    Repetitions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogRequest {
    pub generation: u64,
    pub exercise_id: ExerciseID,
    pub unit: Unit,
    /// Keep the 1RM and %1RM of a prefilled workout if they are still achievable.
    pub keep_intensity: bool,
}

#[derive(Debug)]
pub struct CatalogResponse {
    pub request: CatalogRequest,
    pub result: Result<LoadCatalog, ReadError>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitRequest {
    pub mode: Mode,
    pub record: WorkoutRecord,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("submission already in progress")]
    InProgress,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Fetches the catalog for a request. The response must be passed to
/// [`WorkoutForm::apply_catalog`].
pub async fn fetch_catalog<S: ExerciseService>(
    service: &S,
    request: CatalogRequest,
) -> CatalogResponse {
    CatalogResponse {
        request,
        result: service
            .resolve_loads(request.exercise_id, request.unit)
            .await,
    }
}

/// Sends a submission. The result must be passed to [`WorkoutForm::finish_submit`].
pub async fn send_submission<S: WorkoutService>(
    service: &S,
    request: SubmitRequest,
) -> Result<SavedWorkout, String> {
    match request.mode {
        Mode::Create => service
            .create_workout(request.record)
            .await
            .map_err(|err| err.to_string()),
        Mode::Edit(id) => service
            .replace_workout(id, request.record)
            .await
            .map(SavedWorkout::from)
            .map_err(|err| err.to_string()),
    }
}

pub struct WorkoutForm {
    mode: Mode,
    draft: WorkoutDraft,
    catalog: LoadCatalog,
    catalog_status: CatalogStatus,
    generation: u64,
    options: Vec<PercentOption>,
    metrics: DerivedMetrics,
    submit_status: SubmitStatus,
    success_display: TimeDelta,
    default_unit: Unit,
    on_saved: Option<Box<dyn FnMut(&SavedWorkout)>>,
}

impl WorkoutForm {
    #[must_use]
    pub fn create(client_id: ClientID, coach_id: Option<CoachID>, settings: &Settings) -> Self {
        let mut draft = WorkoutDraft::new(Some(client_id), coach_id);
        draft.unit = settings.default_unit;
        Self::with_draft(Mode::Create, draft, settings)
    }

    /// Prefills the form from an existing workout and requests the catalog of its exercise.
    #[must_use]
    pub fn edit(workout: &Workout, settings: &Settings) -> (Self, Option<CatalogRequest>) {
        let mut form = Self::with_draft(
            Mode::Edit(workout.id),
            WorkoutDraft::from_record(&workout.record),
            settings,
        );
        let request = form.request_catalog(true);
        (form, request)
    }

    fn with_draft(mode: Mode, draft: WorkoutDraft, settings: &Settings) -> Self {
        let metrics = draft.metrics();
        Self {
            mode,
            draft,
            catalog: LoadCatalog::empty(),
            catalog_status: CatalogStatus::Idle,
            generation: 0,
            options: vec![],
            metrics,
            submit_status: SubmitStatus::Idle,
            success_display: settings.success_display,
            default_unit: settings.default_unit,
            on_saved: None,
        }
    }

    /// Registers the callback that receives every successfully saved workout.
    pub fn on_saved(&mut self, callback: impl FnMut(&SavedWorkout) + 'static) {
        self.on_saved = Some(Box::new(callback));
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn draft(&self) -> &WorkoutDraft {
        &self.draft
    }

    #[must_use]
    pub fn catalog(&self) -> &LoadCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn catalog_status(&self) -> &CatalogStatus {
        &self.catalog_status
    }

    #[must_use]
    pub fn percent_options(&self) -> &[PercentOption] {
        &self.options
    }

    #[must_use]
    pub fn metrics(&self) -> DerivedMetrics {
        self.metrics
    }

    /// Density as shown to the user, with two decimals, or empty if undefined.
    #[must_use]
    pub fn density_text(&self) -> String {
        self.metrics
            .density
            .map(|d| format!("{d:.2}"))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn submit_status(&self) -> &SubmitStatus {
        &self.submit_status
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.submit_status != SubmitStatus::Submitting
    }

    pub fn select_exercise(&mut self, exercise_id: Option<ExerciseID>) -> Option<CatalogRequest> {
        if self.draft.exercise_id == exercise_id {
            return None;
        }
        self.draft.exercise_id = exercise_id;
        self.request_catalog(false)
    }

    pub fn set_unit(&mut self, unit: Unit) -> Option<CatalogRequest> {
        if self.draft.unit == unit {
            return None;
        }
        self.draft.unit = unit;
        self.request_catalog(false)
    }

    /// Invalidates the current catalog and everything derived from it.
    fn request_catalog(&mut self, keep_intensity: bool) -> Option<CatalogRequest> {
        self.generation += 1;
        self.catalog = LoadCatalog::empty();
        self.options.clear();
        if !keep_intensity {
            self.draft.clear_intensity();
            self.recompute_metrics();
        }

        let Some(exercise_id) = self.draft.exercise_id else {
            self.catalog_status = CatalogStatus::Idle;
            return None;
        };
        self.catalog_status = CatalogStatus::Loading;
        Some(CatalogRequest {
            generation: self.generation,
            exercise_id,
            unit: self.draft.unit,
            keep_intensity,
        })
    }

    /// Applies a catalog response. Returns `false` if the response was superseded.
    pub fn apply_catalog(&mut self, response: CatalogResponse) -> bool {
        let request = response.request;
        if request.generation != self.generation {
            debug!(
                "discarding stale loads of exercise {} in {} (generation {} < {})",
                request.exercise_id, request.unit, request.generation, self.generation
            );
            return false;
        }

        match response.result {
            Ok(catalog) => {
                self.catalog = catalog;
                self.catalog_status = CatalogStatus::Loaded;
            }
            Err(err) => {
                warn!("failed to load weights of exercise {}: {err}", request.exercise_id);
                self.catalog = LoadCatalog::empty();
                self.catalog_status = CatalogStatus::Failed(format!("Failed to load weights: {err}"));
            }
        }

        if !request.keep_intensity {
            self.draft.clear_intensity();
        }
        self.refresh_options();
        true
    }

    pub fn set_one_rep_max(&mut self, one_rep_max: &str) {
        if self.draft.one_rep_max == one_rep_max {
            return;
        }
        one_rep_max.clone_into(&mut self.draft.one_rep_max);
        self.refresh_options();
    }

    /// Selects a %1RM option and takes over its load as working weight.
    ///
    /// A percentage that is not among the options clears the selection.
    pub fn select_percentage(&mut self, percent: Option<u32>) {
        match selected_option(&self.options, percent) {
            Some(option) => {
                self.draft.percentage = Some(option.percent);
                self.draft.weight = format_decimal(Some(option.load));
            }
            None => self.draft.clear_percentage(),
        }
        self.recompute_metrics();
    }

    pub fn set_field(&mut self, field: Field, value: &str) {
        let target = match field {
            Field::MaxRepetitions => &mut self.draft.max_repetitions,
            Field::RirRepetitions => &mut self.draft.rir_repetitions,
            Field::Concentric => &mut self.draft.concentric,
            Field::Isometric1 => &mut self.draft.isometric_1,
            Field::Eccentric => &mut self.draft.eccentric,
            Field::Isometric2 => &mut self.draft.isometric_2,
            Field::Reps => &mut self.draft.reps,
            Field::Sets => &mut self.draft.sets,
            Field::ExerciseTime => &mut self.draft.exercise_time,
            Field::Rom => &mut self.draft.rom,
            Field::Weight => &mut self.draft.weight,
            Field::Repetitions => &mut self.draft.repetitions,
        };
        value.clone_into(target);

        if field == Field::Weight {
            let load = selected_option(&self.options, self.draft.percentage).map(|o| o.load);
            if load.is_some() && load != parse_decimal(value) {
                self.draft.percentage = None;
            }
        }

        if matches!(
            field,
            Field::Concentric
                | Field::Isometric1
                | Field::Eccentric
                | Field::Isometric2
                | Field::Reps
                | Field::Sets
                | Field::Weight
        ) {
            self.recompute_metrics();
        }
    }

    /// Recomputes the %1RM options and drops a selection that is not achievable anymore.
    fn refresh_options(&mut self) {
        let one_rep_max = parse_decimal(&self.draft.one_rep_max).unwrap_or_default();
        self.options = derive_percent_options(one_rep_max, &self.catalog);
        match selected_option(&self.options, self.draft.percentage) {
            Some(option) => self.draft.weight = format_decimal(Some(option.load)),
            None => self.draft.clear_percentage(),
        }
        self.recompute_metrics();
    }

    fn recompute_metrics(&mut self) {
        self.metrics = self.draft.metrics();
    }

    /// Starts a submission.
    ///
    /// Fails without contacting the backend if a submission is already in flight or the draft
    /// is incomplete.
    pub fn begin_submit(&mut self) -> Result<SubmitRequest, SubmitError> {
        if self.submit_status == SubmitStatus::Submitting {
            return Err(SubmitError::InProgress);
        }
        match assemble(&self.draft) {
            Ok(record) => {
                self.submit_status = SubmitStatus::Submitting;
                Ok(SubmitRequest {
                    mode: self.mode,
                    record,
                })
            }
            Err(err) => {
                self.submit_status = SubmitStatus::Error(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Completes a submission started by [`WorkoutForm::begin_submit`].
    pub fn finish_submit(
        &mut self,
        result: Result<SavedWorkout, String>,
        now: DateTime<Utc>,
    ) -> Option<SavedWorkout> {
        if self.submit_status != SubmitStatus::Submitting {
            debug!("ignoring submission result without pending submission");
            return None;
        }

        match result {
            Ok(workout) => {
                let message = match self.mode {
                    Mode::Create => "Workout successfully created!!",
                    Mode::Edit(_) => "Workout successfully updated!!",
                };
                self.submit_status = SubmitStatus::Success {
                    message: message.to_string(),
                    since: now,
                };
                if let Some(on_saved) = self.on_saved.as_mut() {
                    on_saved(&workout);
                }
                if self.mode == Mode::Create {
                    self.reset();
                }
                Some(workout)
            }
            Err(message) => {
                let message = if message.trim().is_empty() {
                    "Failed to save workout".to_string()
                } else {
                    message
                };
                self.submit_status = SubmitStatus::Error(message);
                None
            }
        }
    }

    /// Submits the draft and waits for the backend.
    pub async fn submit<S: WorkoutService>(
        &mut self,
        service: &S,
    ) -> Result<Option<SavedWorkout>, SubmitError> {
        let request = self.begin_submit()?;
        let result = send_submission(service, request).await;
        Ok(self.finish_submit(result, Utc::now()))
    }

    /// Lets a success message expire.
    pub fn tick(&mut self, now: DateTime<Utc>) {
        if let SubmitStatus::Success { since, .. } = self.submit_status {
            if now - since >= self.success_display {
                self.submit_status = SubmitStatus::Idle;
            }
        }
    }

    fn reset(&mut self) {
        let mut draft = WorkoutDraft::new(self.draft.client_id, self.draft.coach_id);
        draft.unit = self.default_unit;
        self.draft = draft;
        self.generation += 1;
        self.catalog = LoadCatalog::empty();
        self.catalog_status = CatalogStatus::Idle;
        self.options.clear();
        self.recompute_metrics();
    }
}
