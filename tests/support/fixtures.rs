//! Test fixtures and constants.

/// Secrets in the standard fake store, in listing order.
pub const STORE_SECRETS: &[(&str, &str)] = &[
    ("db/user", "admin"),
    ("db/pass", "hunter2"),
    ("other", "unrelated"),
    ("api-key", "sk-test-12345"),
];

/// A JSON secret exercising nested objects and arrays.
pub const JSON_SECRET: &str = r#"{"db": {"user": "u", "port": 5432}, "hosts": ["a", "b"], "tls": {}}"#;
