pub mod emotion;
pub mod profile;
pub mod scores;
