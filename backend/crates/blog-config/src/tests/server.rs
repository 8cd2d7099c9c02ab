use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Server & Database
// =========================================================================

#[test]
#[serial]
fn given_port_below_1024_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _port = EnvGuard::set("BLOG_SERVER_PORT", "80");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_port_1024_when_validate_then_ok() {
    let _temp = setup_config_dir();
    let _port = EnvGuard::set("BLOG_SERVER_PORT", "1024");

    let config = Config::load().unwrap();

    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_port_zero_when_validate_then_ok() {
    let _temp = setup_config_dir();
    let _port = EnvGuard::set("BLOG_SERVER_PORT", "0");

    let config = Config::load().unwrap();

    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_absolute_database_path_when_validate_then_error() {
    let _temp = setup_config_dir();
    let _path = EnvGuard::set("BLOG_DATABASE_PATH", "/var/lib/blog.db");

    let config = Config::load().unwrap();

    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_empty_host_when_validate_then_error() {
    let _temp = setup_config_dir();
    let _host = EnvGuard::set("BLOG_SERVER_HOST", "  ");

    let config = Config::load().unwrap();

    assert_that!(config.validate(), err(anything()));
}
