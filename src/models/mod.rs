//! Data models for the address book records.
//!
//! This module contains the entity types stored in the address book:
//! persons, clients and products. Each entity is composed of validated
//! domain value objects and is immutable once built.

pub mod client;
pub mod person;
pub mod product;

pub use client::Client;
pub use person::Person;
pub use product::Product;
