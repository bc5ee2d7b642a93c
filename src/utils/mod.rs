// Wed Aug 26 2026 - Alex

pub mod logging;
pub mod string;

pub use logging::LoggingUtils;
pub use string::StringUtils;
