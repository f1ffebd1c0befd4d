//! Offices: the read replica maintained from backoffice events.

mod repository;

pub use repository::{InMemoryOfficesRepository, MockOfficesRepository, OfficesRepository};
