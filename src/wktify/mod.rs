pub mod error;
pub mod reader;
pub mod text;
pub mod transform;
