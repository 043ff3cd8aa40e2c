//! Workout programs: the storage seams, their PostgreSQL implementation,
//! and the service that ties generation, parsing and storage together.

pub mod pg;
pub mod service;
pub mod store;

pub use pg::PgStore;
pub use service::{Persistence, ProgramOutcome, ProgramRequest, create_program};
pub use store::{PersistenceError, ProfileStore, ProgramDraft, ProgramStore, SavedProgram};
