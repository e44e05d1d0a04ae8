pub mod preview;
pub mod serve;

pub use preview::preview;
pub use serve::serve;
