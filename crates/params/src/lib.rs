//! Algorithm constants for the Saber KEM workspace

pub mod pqc;
