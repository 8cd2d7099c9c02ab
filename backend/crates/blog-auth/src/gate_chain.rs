use crate::{AuthenticationGate, Gate, GateDecision, Session, authorize};

use blog_core::Role;

use std::sync::Arc;

/// Ordered gates evaluated before a route handler.
///
/// The first gate that halts decides the response; later gates never run.
/// An empty chain lets every request through.
#[derive(Clone, Default)]
pub struct GateChain {
    gates: Vec<Arc<dyn Gate>>,
}

impl GateChain {
    pub fn new() -> Self {
        Self { gates: Vec::new() }
    }

    /// Append a gate to the end of the chain
    pub fn with(mut self, gate: impl Gate + 'static) -> Self {
        self.gates.push(Arc::new(gate));
        self
    }

    /// [authenticated]
    pub fn authenticated() -> Self {
        Self::new().with(AuthenticationGate::new())
    }

    /// [authenticated, authorize(roles)]; authentication always runs first
    pub fn protected(roles: &[Role]) -> Self {
        Self::authenticated().with(authorize(roles))
    }

    pub fn len(&self) -> usize {
        self.gates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    pub fn names(&self) -> Vec<String> {
        self.gates.iter().map(|gate| gate.name()).collect()
    }

    pub fn evaluate(&self, session: Option<&Session>) -> GateDecision {
        for gate in &self.gates {
            if let GateDecision::Halt(rejection) = gate.evaluate(session) {
                log::debug!("Gate {} halted request: {}", gate.name(), rejection);
                return GateDecision::Halt(rejection);
            }
        }
        GateDecision::Proceed
    }
}

impl std::fmt::Debug for GateChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
