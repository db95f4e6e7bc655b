pub mod ids;
pub mod json;
pub mod logging;
