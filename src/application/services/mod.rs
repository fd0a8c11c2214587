pub mod alias_emitter;
pub mod discovery_service;

pub use alias_emitter::AliasEmitter;
pub use discovery_service::DiscoveryService;
