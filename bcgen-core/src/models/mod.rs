pub mod pool;
pub mod request;
pub mod sequence;

// re-export for cleaner imports
pub use self::pool::Pool;
pub use self::request::{GenerationRequest, capacity_bound};
pub use self::sequence::Sequence;
