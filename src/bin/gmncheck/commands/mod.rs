/// Internal module.
pub mod batch;
/// Internal module.
pub mod check;
/// Internal module.
pub mod complete;
/// Internal module.
pub mod positions;
/// Internal module.
pub mod verify;
