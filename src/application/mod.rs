//! Application layer: services and use cases
//!
//! This layer orchestrates domain logic: binding parsed arguments and
//! dispatching verbs to handlers.

pub mod error;
pub mod report;
pub mod services;

pub use error::{DispatchError, DispatchResult, HandlerError, RegistrationError, SettingsError};
pub use report::{failure_rows, ReportRow};
pub use services::{
    Binder, CommandDescriptor, DispatchStatus, Dispatcher, Execute, HandlerResult, RegistryBuilder,
};
