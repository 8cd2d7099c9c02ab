use crate::{Gate, GateDecision, GateRejection, Principal, Session};

use blog_core::Role;

/// Passes identities whose role is in a fixed allow-list.
///
/// The list is bound when the route is registered. A missing identity is
/// treated like a role outside the list, so the gate is safe even when it is
/// not preceded by an [`AuthenticationGate`](crate::AuthenticationGate).
/// An empty list denies everyone.
#[derive(Debug, Clone)]
pub struct AuthorizationGate {
    allowed: Vec<Role>,
}

impl AuthorizationGate {
    pub fn new(allowed: impl IntoIterator<Item = Role>) -> Self {
        let mut roles: Vec<Role> = Vec::new();
        for role in allowed {
            if !roles.contains(&role) {
                roles.push(role);
            }
        }
        Self { allowed: roles }
    }

    pub fn allowed_roles(&self) -> &[Role] {
        &self.allowed
    }

    pub fn permits(&self, role: Role) -> bool {
        self.allowed.contains(&role)
    }
}

impl Gate for AuthorizationGate {
    fn evaluate(&self, session: Option<&Session>) -> GateDecision {
        match Principal::from_session(session) {
            Principal::Present(identity) if self.permits(identity.role) => GateDecision::Proceed,
            Principal::Present(_) | Principal::Absent => {
                GateDecision::Halt(GateRejection::Forbidden)
            }
        }
    }

    fn name(&self) -> String {
        let roles: Vec<&str> = self.allowed.iter().map(Role::as_str).collect();
        format!("authorize({})", roles.join(", "))
    }
}

/// Factory used at route registration: `authorize(&[Role::Author, Role::Admin])`
pub fn authorize(roles: &[Role]) -> AuthorizationGate {
    AuthorizationGate::new(roles.iter().copied())
}
