//! Application service layer.
//!
//! Services tie the parser, the model and storage together. They provide a
//! clean boundary between the interactive front end and the data layer.

mod logic_service;

pub use logic_service::{Logic, LogicManager};
