//! Linode Records Infrastructure Layer
pub mod linode;
