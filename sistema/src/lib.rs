//! Aggregation service composing the EduTech record services.
//!
//! The crate is laid out hexagonally: `domain` owns the entities, the
//! enrichment engine, and the ports; `outbound` implements the driven ports
//! against the remote HTTP services; `inbound::http` exposes the read-only
//! aggregation API; `server` wires configuration and the actix application.

pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod server;
