pub mod definition;
pub mod record;

pub use definition::*;
pub use record::*;
