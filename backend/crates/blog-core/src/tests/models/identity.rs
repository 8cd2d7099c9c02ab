use crate::{Identity, Role, User};

use googletest::prelude::*;
use uuid::Uuid;

fn identity(role: Role) -> Identity {
    Identity {
        id: Uuid::new_v4(),
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        role,
    }
}

#[test]
fn given_user_when_projected_then_identity_copies_public_fields() {
    let mut user = User::new(
        "Ada".to_string(),
        "ada@example.com".to_string(),
        "$2b$10$hash".to_string(),
    );
    user.role = Role::Author;

    let identity = Identity::from(&user);

    assert_that!(identity.id, eq(user.id));
    assert_that!(identity.name, eq("Ada"));
    assert_that!(identity.email, eq("ada@example.com"));
    assert_that!(identity.role, eq(Role::Author));
}

#[test]
fn given_owner_when_can_manage_then_true() {
    let author = identity(Role::Author);
    assert_that!(author.can_manage(author.id), eq(true));
}

#[test]
fn given_other_owner_when_can_manage_then_only_admin_passes() {
    let owner = Uuid::new_v4();
    assert_that!(identity(Role::Author).can_manage(owner), eq(false));
    assert_that!(identity(Role::User).can_manage(owner), eq(false));
    assert_that!(identity(Role::Admin).can_manage(owner), eq(true));
}

#[test]
fn given_user_when_serialized_then_password_hash_is_omitted() {
    let user = User::new(
        "Ada".to_string(),
        "ada@example.com".to_string(),
        "$2b$10$secret".to_string(),
    );

    let json = serde_json::to_string(&user).unwrap();

    assert_that!(json, not(contains_substring("secret")));
    assert_that!(json, contains_substring("\"role\":\"user\""));
}
