//! Repository modules
//!
//! Raw-SQL repositories over the shared connection pool

pub mod event;
pub mod registration;
pub mod user;

pub use event::{EventFilter, EventRepository};
pub use registration::RegistrationRepository;
pub use user::{NewUser, UserChanges, UserRepository};
