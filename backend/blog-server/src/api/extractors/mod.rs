pub mod current_identity;
pub mod maybe_identity;
