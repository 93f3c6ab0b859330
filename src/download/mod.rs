pub mod certs;
pub mod http;
