pub mod about;
pub mod analyze;
pub mod keywords;
pub mod languages;
pub mod rank;
pub mod version;
