pub mod ports;
pub mod question;
pub mod session;
