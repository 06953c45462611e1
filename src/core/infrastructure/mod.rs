pub mod api_client;
pub mod query;
pub mod transport;
