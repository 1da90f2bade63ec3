pub mod cost;
pub mod energy;
pub mod rate;
