pub mod png;
pub mod share;
