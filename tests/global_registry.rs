//! Process-wide registry lifecycle.
//!
//! One test only: the global registry is shared process state.

use std::io::Write;

use fieldcheck_core::schema::{NumberConstraint, Schema};
use fieldcheck_core::validation::validate;
use fieldcheck_core::{
    get_schema, global_registry, init_global_registry, register_schema, RegistryError,
};
use serde_json::json;

#[test]
fn global_registry_lifecycle() {
    // A failed init leaves the global empty, unfrozen and retryable
    let mut bad = tempfile::NamedTempFile::new().unwrap();
    write!(bad, r#"{{"tag": {{"label": {{"type": "text"}}}}}}"#).unwrap();

    assert!(init_global_registry(Some(bad.path())).is_err());
    {
        let registry = global_registry();
        assert!(!registry.is_frozen());
        assert!(registry.is_empty());
    }

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"tag": {{"label": {{"type": "string", "required": true, "minLength": 2}}}}}}"#
    )
    .unwrap();

    init_global_registry(Some(file.path())).unwrap();
    // Second init is a no-op once frozen
    init_global_registry(None).unwrap();

    {
        let registry = global_registry();
        assert!(registry.is_frozen());
        assert_eq!(
            registry.names(),
            vec!["community", "subcategory", "member-change", "plugin-settings", "tag"]
        );
    }

    let schema = get_schema("tag").unwrap();
    let record = json!({"label": "x"}).as_object().cloned().unwrap();
    assert!(!validate(&schema, &record).valid);

    assert_eq!(
        get_schema("forum").unwrap_err(),
        RegistryError::UnknownSchema("forum".to_string())
    );

    let late = Schema::builder().field("n", NumberConstraint::required()).build();
    assert_eq!(
        register_schema("late", late).unwrap_err(),
        RegistryError::Frozen("late".to_string())
    );

    // Concurrent readers
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| get_schema("community").map(|s| s.len())))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), Ok(3));
    }
}
