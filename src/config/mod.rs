pub mod source_config;

pub use source_config::SourceConfig;
