pub mod assets;
pub mod digest;
pub mod manifest;
pub mod resolve;
