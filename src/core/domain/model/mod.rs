pub mod brick;
pub mod cluster;
pub mod cluster_ref;
pub mod credentials;
pub mod dae;
pub mod resource_identity;
pub mod resource_type;
pub mod slot;
pub mod ssd;
pub mod volume;
pub mod xtremio_config;
pub mod xtremio_connection;
pub mod xtremio_object;
