#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod log;
pub mod session;
pub mod settings;
pub mod workout_form;

pub use session::{SessionContext, SessionEvent, SessionHandle, Subscription};
pub use settings::Settings;
pub use workout_form::WorkoutForm;
