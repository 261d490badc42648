pub mod parsers;
pub mod sources;
