use crate::{Gate, GateDecision, GateRejection, Principal, Session};

/// Passes any request whose session carries an identity.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthenticationGate;

impl AuthenticationGate {
    pub fn new() -> Self {
        Self
    }
}

impl Gate for AuthenticationGate {
    fn evaluate(&self, session: Option<&Session>) -> GateDecision {
        match Principal::from_session(session) {
            Principal::Present(_) => GateDecision::Proceed,
            Principal::Absent => GateDecision::Halt(GateRejection::Unauthenticated),
        }
    }

    fn name(&self) -> String {
        String::from("authenticated")
    }
}
