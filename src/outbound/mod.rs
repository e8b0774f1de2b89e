//! Driven adapters implementing domain ports.

pub mod persistence;
