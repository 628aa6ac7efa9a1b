//! Test queries through the shared handle.

use crate::e2e_tests::helpers::designers_database;
use crate::query::dsl::{attribute, object, parse_int, predicate, subject, subquery};
use crate::store::{ResourceDatabase, SharedDatabaseError, SharedResourceDatabase};

#[test]
fn test_readers_share_one_database() {
    let shared = SharedResourceDatabase::new(designers_database());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let reader = shared.share();
            std::thread::spawn(move || {
                reader
                    .select(
                        &object().as_text(),
                        &predicate().equals("my:wife").and(subject().equals(subquery(
                            subject(),
                            parse_int(attribute("my:kids")).greater_than(5),
                        ))),
                    )
                    .expect("select")
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("reader"), vec!["Anna"]);
    }
}

#[test]
fn test_writes_are_visible_to_other_handles() {
    let shared = SharedResourceDatabase::new(ResourceDatabase::new());
    let other = shared.share();
    let id = shared
        .add_statement(ResourceDatabase::literal("Topi", "my:kids", "6"))
        .expect("add");
    assert_eq!(id, 0);
    assert_eq!(other.statement_count().expect("count"), 1);
    let found = other
        .read(|db| db.statement(0).map(crate::types::Statement::object_text))
        .expect("read");
    assert_eq!(found.as_deref(), Some("6"));
}

#[test]
fn test_query_error_is_wrapped() {
    let shared = SharedResourceDatabase::new(designers_database());
    let result = shared.select(&parse_int(object()), &predicate().equals("my:title"));
    assert!(matches!(result, Err(SharedDatabaseError::Query(_))));
}
