pub mod configuration;
pub mod isomers;
pub mod fischer;
