pub mod audio;
pub mod connector;
pub mod knowledge_base;
pub mod observability;
