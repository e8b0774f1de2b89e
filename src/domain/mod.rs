//! Domain types and ports.
//!
//! The sole aggregate is the [`User`] record; persistence happens behind the
//! [`ports::UserRepository`] port so HTTP handlers stay testable without a
//! database.

pub mod ports;
pub mod user;

pub use self::user::{NewUser, User, UserId, UserValidationError};
