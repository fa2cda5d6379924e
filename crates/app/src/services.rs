//! Application services: use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod booking_service;
pub mod class_service;
pub mod user_service;

#[cfg(test)]
mod in_memory;
