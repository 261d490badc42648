pub mod asset_exts;
pub mod digest;
pub mod env_resolver;
pub mod manifest_service;
