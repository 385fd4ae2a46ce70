pub mod order;
pub mod state;

pub use order::*;
pub use state::*;
