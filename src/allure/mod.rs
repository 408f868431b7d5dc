//! Allure result model.

pub mod schema;

pub use schema::{AllureResult, Label, Status, StatusDetails, Step};
