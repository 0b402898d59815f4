pub mod band;
pub mod compass;
pub mod moon_phase;
pub mod reading;
pub mod snapshot;
pub mod solar;
