//! Internal HTTP layer: transport and response translation.

pub(crate) mod client;
pub(crate) mod response;

pub(crate) use client::HttpClient;
