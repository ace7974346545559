pub mod decode;
pub mod source;
pub mod store;
pub mod text;
