//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services only read their inputs; the command registry is frozen before
//! any dispatch call.

mod binder;
mod dispatcher;

pub use binder::Binder;
pub use dispatcher::{
    CommandDescriptor, DispatchStatus, Dispatcher, Execute, HandlerResult, RegistryBuilder,
};
