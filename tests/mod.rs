pub mod outcome;
pub mod traits;
