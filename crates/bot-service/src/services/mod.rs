//! Services
//!
//! The dependency container, the service error type, and the admin record
//! service. The dialog engine lives in [`crate::dialog`].

pub mod context;
pub mod error;
pub mod records;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use records::RecordService;
