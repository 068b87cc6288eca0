pub mod mock_data;
pub mod stats;

pub use mock_data::*;
pub use stats::*;
