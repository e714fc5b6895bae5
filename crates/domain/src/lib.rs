#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod client;
mod coach;
mod error;
mod exercise;
mod load;
mod name;
mod number;
mod percent;
mod service;
mod session;
mod tempo;
mod unit;
mod workout;

pub use client::*;
pub use coach::*;
pub use error::*;
pub use exercise::*;
pub use load::*;
pub use name::*;
pub use number::*;
pub use percent::*;
pub use service::*;
pub use session::*;
pub use tempo::*;
pub use unit::*;
pub use workout::*;
