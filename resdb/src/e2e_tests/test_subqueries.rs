//! Test nested selects used as membership sets.

use crate::e2e_tests::helpers::{designers_database, text_set};
use crate::query::dsl::{
    attribute, object, parse_int, predicate, reified_id, statement_id, subject, subquery,
};

#[test]
fn test_real_designers() {
    let db = designers_database();
    let approved = subquery(
        reified_id(subject()),
        attribute("my:evaluation").equals("true"),
    );
    let designers = db
        .select(
            &object().as_text(),
            &predicate()
                .equals("my:designer")
                .and(statement_id().equals(approved)),
        )
        .expect("select");
    assert_eq!(designers, vec!["Topi", "Lasse"]);
}

#[test]
fn test_wife_of_person_with_many_kids() {
    let db = designers_database();
    let many_kids = subquery(subject(), parse_int(attribute("my:kids")).greater_than(5));
    let wives = db
        .select(
            &object().as_text(),
            &predicate().equals("my:wife").and(subject().equals(many_kids)),
        )
        .expect("select");
    assert_eq!(text_set(wives), text_set(["Anna"]));
}

#[test]
fn test_wife_of_person_with_few_kids_from_earlier_result() {
    let db = designers_database();
    let few_kids = db
        .select(&subject().as_text(), &parse_int(attribute("my:kids")).less_than(2))
        .expect("select");
    let wives = db
        .select(
            &object().as_text(),
            &predicate().equals("my:wife").and(subject().equals(few_kids)),
        )
        .expect("select");
    assert_eq!(text_set(wives), text_set(["Johanna"]));
}

#[test]
fn test_designer_of_married_people() {
    let db = designers_database();
    let married = subquery(subject(), attribute("my:wife").not_equals(""));
    let subjects = db
        .select(&subject().as_text(), &attribute("my:designer").equals(married))
        .expect("select");
    assert_eq!(subjects.len(), 3);
    assert_eq!(text_set(subjects), text_set(["PiiResourceDatabase"]));
}

#[test]
fn test_not_in_subquery() {
    let db = designers_database();
    let approved = subquery(
        reified_id(subject()),
        attribute("my:evaluation").equals("true"),
    );
    let designers = db
        .select(
            &object().as_text(),
            &predicate()
                .equals("my:designer")
                .and(statement_id().not_equals(approved)),
        )
        .expect("select");
    assert_eq!(designers, vec!["Olli"]);
}

#[test]
fn test_empty_subquery_matches_nothing() {
    let db = designers_database();
    let nobody = subquery(subject(), predicate().equals("my:hobby"));
    let found = db
        .select_statements(&subject().equals(nobody))
        .expect("select");
    assert!(found.is_empty());
}

#[test]
fn test_nested_subqueries() {
    let db = designers_database();
    // Evaluations of designers that have a wife.
    let married = subquery(subject(), predicate().equals("my:wife"));
    let married_designer_ids = subquery(statement_id(), attribute("my:designer").equals(married));
    let verdicts = db
        .select(
            &object().as_text(),
            &reified_id(subject()).equals(married_designer_ids),
        )
        .expect("select");
    assert_eq!(verdicts, vec!["true", "true", "false"]);
}
