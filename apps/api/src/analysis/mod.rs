pub mod evaluation;
pub mod explain;
pub mod handlers;
pub mod improvements;
pub mod prompts;
pub mod report;
pub mod roles;
pub mod scoring;
pub mod sections;
pub mod signals;
