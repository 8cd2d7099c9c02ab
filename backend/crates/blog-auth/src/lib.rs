pub mod authentication_gate;
pub mod authorization_gate;
pub mod error;
pub mod gate;
pub mod gate_chain;
pub mod memory_session_store;
pub mod password;
pub mod principal;
pub mod session;
pub mod session_store;

pub use authentication_gate::AuthenticationGate;
pub use authorization_gate::{AuthorizationGate, authorize};
pub use error::{AuthError, Result};
pub use gate::{Gate, GateDecision, GateRejection};
pub use gate_chain::GateChain;
pub use memory_session_store::MemorySessionStore;
pub use password::PasswordHasher;
pub use principal::Principal;
pub use session::{Session, SessionToken};
pub use session_store::SessionStore;

#[cfg(test)]
mod tests;
