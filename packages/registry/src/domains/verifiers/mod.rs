//! Verifiers domain - delegation of verification authority
//!
//! The admin is the only principal that can grant verifier status, and the
//! grant is the only delegation path. The verifier set is append-only: no
//! revocation operation exists.

pub mod actions;
pub mod events;
