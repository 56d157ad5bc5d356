//! Service layer for the user/team/quiz registry.
//! - `storage`: persisted document adapter and the keyed collections.
//! - `integrity`: create-time cross-collection reference checks.
//! - `registry`: the process-wide store handed to request handlers.

pub mod errors;
pub mod integrity;
pub mod registry;
pub mod storage;

pub use registry::Registry;
