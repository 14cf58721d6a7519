//! Adapters for the collaborator ports.

pub mod in_memory;
