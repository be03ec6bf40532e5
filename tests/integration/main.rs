mod footprint_flow;
mod workspace_config;
pub mod support;
