pub mod endpoint;
pub mod pem;
