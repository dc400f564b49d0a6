//! Domain and delivery errors

mod delivery_error;
mod domain_error;

pub use delivery_error::DeliveryError;
pub use domain_error::DomainError;
