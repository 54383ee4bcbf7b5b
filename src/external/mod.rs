//! Clients for talking to outside services

pub mod client;
