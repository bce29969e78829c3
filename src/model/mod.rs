//! Pure data structures stored by the resource actors.

pub mod ids;
pub mod order;
pub mod product;
pub mod status;

pub use ids::*;
pub use order::*;
pub use product::*;
pub use status::*;
