//! Types shared by every backend.

pub mod error;

pub use error::{DatabaseError, DatabaseResult};
