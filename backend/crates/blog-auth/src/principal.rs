use crate::Session;

use blog_core::Identity;

/// Who a request is acting as, as seen by the gates.
///
/// "No session at all" and "session without identity" both collapse to
/// `Absent`, so every gate handles the missing case as an explicit branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Principal<'a> {
    Present(&'a Identity),
    Absent,
}

impl<'a> Principal<'a> {
    pub fn from_session(session: Option<&'a Session>) -> Self {
        match session.and_then(Session::identity) {
            Some(identity) => Self::Present(identity),
            None => Self::Absent,
        }
    }

    pub fn identity(&self) -> Option<&'a Identity> {
        match self {
            Self::Present(identity) => Some(identity),
            Self::Absent => None,
        }
    }
}
