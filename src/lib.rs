//! # Muro Core
//!
//! Core business logic and domain models for the Muro task board.
//!
//! This crate provides the authoritative board store, the request/response
//! boundary in front of it, and the client-side drag-and-drop state
//! machine, without any dependency on a specific HTTP framework or
//! rendering surface.

pub mod api;
pub mod client;
pub mod domain;
pub mod error;

// Re-export commonly used types
pub use api::{Ack, ApiFailure, BoardApi, CreateCardRequest, CreateListRequest, MoveCardRequest};
pub use client::{BoardSurface, DragController, DragState, DropOutcome, MoveApi};
pub use domain::{BoardStore, Card, CardId, List, ListId};
pub use error::{MuroError, Result};
