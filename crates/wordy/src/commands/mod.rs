pub mod download;
pub mod generate;
