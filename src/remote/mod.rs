pub mod config;
pub mod schema;

pub use config::AnalyzerConfig;
pub use schema::ResponseSchema;
