//! REST API for calculator module

pub mod dto;
pub mod error;
pub mod handlers;
pub mod messages;
pub mod routes;
