//! Test statements about statements.

use crate::e2e_tests::helpers::designers_database;
use crate::query::NOT_REIFIED;
use crate::query::dsl::{attribute, everything, reified_id, statement_id, subject};
use crate::store::ResourceDatabase;
use crate::types::ResourceId;

#[test]
fn test_reifying_statements_are_found() {
    let db = designers_database();
    let ids = db
        .select(
            &statement_id().as_int(),
            &reified_id(subject()).not_equals(NOT_REIFIED),
        )
        .expect("select");
    assert_eq!(ids, vec![1, 3, 5]);
}

#[test]
fn test_reified_targets() {
    let db = designers_database();
    let targets = db
        .select(
            &reified_id(subject()).as_int(),
            &attribute("my:evaluation").equals("true"),
        )
        .expect("select");
    assert_eq!(targets, vec![0, 2]);
}

#[test]
fn test_integer_and_text_subject_are_equivalent() {
    let mut by_id = ResourceDatabase::new();
    let mut by_text = ResourceDatabase::new();
    for db in [&mut by_id, &mut by_text] {
        db.add_statement(ResourceDatabase::resource("Op", "my:designer", "Topi"));
    }
    by_id.add_statement(ResourceDatabase::literal(0_i64, "my:evaluation", "true"));
    by_text.add_statement(ResourceDatabase::literal("[0]", "my:evaluation", "true"));

    assert_eq!(by_id.statement(1), by_text.statement(1));
    let stored = by_id.statement(1).expect("stored");
    assert_eq!(stored.subject(), &ResourceId::Statement(0));
    assert_eq!(stored.subject_text(), "[0]");
}

#[test]
fn test_subject_text_matches_reference_token() {
    let db = designers_database();
    let ids = db
        .select(&statement_id().as_int(), &subject().equals("[4]"))
        .expect("select");
    assert_eq!(ids, vec![5]);
}

#[test]
fn test_non_canonical_reference_is_a_name() {
    let mut db = ResourceDatabase::new();
    db.add_statement(ResourceDatabase::literal("[007]", "my:note", "bond"));
    let ids = db
        .select(&reified_id(subject()).as_int(), &everything())
        .expect("select");
    assert_eq!(ids, vec![NOT_REIFIED]);
}

#[test]
fn test_reference_to_unknown_statement_is_stored() {
    let mut db = ResourceDatabase::new();
    assert_eq!(db.add_statement(ResourceDatabase::literal(42_i64, "my:note", "dangling")), 0);
    let targets = db
        .select(&reified_id(subject()).as_int(), &everything())
        .expect("select");
    assert_eq!(targets, vec![42]);
}

#[test]
fn test_statement_about_failed_insert() {
    let mut db = ResourceDatabase::new();
    let failed = db.add_statement(ResourceDatabase::literal("", "my:designer", "Topi"));
    assert_eq!(failed, crate::types::UNASSIGNED_ID);

    let about_failed = ResourceDatabase::literal(failed, "my:evaluation", "false");
    assert_eq!(
        about_failed,
        ResourceDatabase::literal("[-1]", "my:evaluation", "false")
    );
    assert_eq!(about_failed.subject().statement_id(), None);

    db.add_statement(about_failed);
    let targets = db
        .select(&reified_id(subject()).as_int(), &everything())
        .expect("select");
    assert_eq!(targets, vec![NOT_REIFIED]);
}
