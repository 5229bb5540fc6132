//! Persistence ports for the three catalog collections.
//!
//! Ports return `Ok(None)` for absent records; translating absence into a
//! typed not-found error is the orchestrator's job. Updates are
//! last-write-wins with two exceptions enforced at the adapter: a
//! non-blank slug already owned by another record of the same collection
//! is rejected, and a title's `announced` marker never reverts.

mod genres;
mod performers;
mod titles;

pub use genres::GenreStore;
pub use performers::PerformerStore;
pub use titles::TitleStore;
