//! Relay Core
//!
//! Core types shared by the Relay prompt gateway and its prediction client.
//!
//! This crate contains:
//! - Domain types: Core entities (Credential, HistoryEntry, Prediction)
//! - DTOs: Request/response bodies for the gateway and the upstream API

pub mod domain;
pub mod dto;
