//! Clients for external collaborators.

pub mod imgbb;
