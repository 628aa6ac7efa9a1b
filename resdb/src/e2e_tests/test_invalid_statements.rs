//! Test that invalid statements are rejected without side effects.

use crate::e2e_tests::helpers::designers_database;
use crate::query::dsl::{everything, statement_id};
use crate::store::ResourceDatabase;
use crate::types::{ObjectKind, Statement, UNASSIGNED_ID};

#[test]
fn test_invalid_inserts_do_not_consume_ids() {
    let mut db = designers_database();
    let rejected = [
        Statement::invalid(),
        ResourceDatabase::literal("", "my:title", "CTO"),
        ResourceDatabase::literal("Topi", "my:title", ""),
        ResourceDatabase::resource("Topi", "my:wife", ""),
        Statement::new("Topi", "my:title", "CTO", ObjectKind::Invalid),
    ];
    for statement in rejected {
        assert_eq!(db.add_statement(statement), UNASSIGNED_ID);
    }
    assert_eq!(db.statement_count(), 15);

    let id = db.add_statement(ResourceDatabase::literal("Topi", "my:car", "Saab"));
    assert_eq!(id, 15);
    let ids = db
        .select(&statement_id().as_int(), &everything())
        .expect("select");
    assert_eq!(ids, (0..16).collect::<Vec<i64>>());
}

#[test]
fn test_default_statement_is_invalid() {
    let mut db = ResourceDatabase::new();
    assert_eq!(db.add_statement(Statement::default()), UNASSIGNED_ID);
    assert!(db.is_empty());
}

#[test]
fn test_empty_predicate_is_stored() {
    let mut db = ResourceDatabase::new();
    assert_eq!(db.add_statement(ResourceDatabase::literal("Topi", "", "x")), 0);
    assert_eq!(db.statement_count(), 1);
}
