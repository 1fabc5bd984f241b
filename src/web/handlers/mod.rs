pub mod section_handlers;
pub mod system_handlers;

pub use section_handlers::*;
pub use system_handlers::*;
