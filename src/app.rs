pub mod notify;
pub mod session;
