//! Inbound adapters exposing the aggregation façade.

pub mod http;
