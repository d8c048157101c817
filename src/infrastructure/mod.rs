pub mod http;
pub mod notify;
pub mod observability;
