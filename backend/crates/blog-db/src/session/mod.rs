pub mod sqlite_session_store;
