//! Repository implementations for the locations domain

pub mod locations;

pub use locations::LocationRepository;
