// Tue Aug 25 2026 - Alex

pub mod config;
pub mod directive;
pub mod emitter;
pub mod error;
pub mod resolver;
pub mod utils;

pub use config::Config;
pub use directive::{Directive, DirectiveKind, DirectiveParser};
pub use emitter::MetaProgramEmitter;
pub use error::GeneratorError;
pub use resolver::{BodyResolver, FieldEntry, ResolvedBody};
