//! Test the basic selects on the designers database.

use crate::e2e_tests::helpers::{designers_database, text_set};
use crate::query::dsl::{
    attribute, not, object, parse_int, predicate, resource_type, statement_id, subject,
};
use crate::types::ObjectKind;

#[test]
fn test_select_designers_in_insertion_order() {
    let db = designers_database();
    assert_eq!(db.statement_count(), 15);

    let designers = db
        .select(&object().as_text(), &predicate().equals("my:designer"))
        .expect("select");
    assert_eq!(designers, vec!["Topi", "Lasse", "Olli"]);
}

#[test]
fn test_select_wife_of_olli() {
    let db = designers_database();
    let wives = db
        .select(
            &object().as_text(),
            &subject().equals("Olli").and(predicate().equals("my:wife")),
        )
        .expect("select");
    assert_eq!(wives, vec!["Johanna"]);
}

#[test]
fn test_or_of_object_and_attribute() {
    let db = designers_database();
    let subjects = db
        .select(
            &subject().as_text(),
            &object().equals("CTO").or(attribute("my:wife").equals("Anna")),
        )
        .expect("select");
    assert_eq!(subjects, vec!["Topi", "Topi"]);
}

#[test]
fn test_attribute_equals_is_predicate_and_object() {
    let db = designers_database();
    let by_attribute = db
        .select(&statement_id().as_int(), &attribute("my:evaluation").equals("true"))
        .expect("select");
    let by_pair = db
        .select(
            &statement_id().as_int(),
            &predicate().equals("my:evaluation").and(object().equals("true")),
        )
        .expect("select");
    assert_eq!(by_attribute, vec![1, 3]);
    assert_eq!(by_attribute, by_pair);
}

#[test]
fn test_parse_int_projection() {
    let db = designers_database();
    let kids = db
        .select(&parse_int(object()).as_int(), &predicate().equals("my:kids"))
        .expect("select");
    assert_eq!(kids, vec![6, 3, 1]);
}

#[test]
fn test_few_kids() {
    let db = designers_database();
    let subjects = db
        .select(&subject().as_text(), &parse_int(attribute("my:kids")).less_than(2))
        .expect("select");
    assert_eq!(subjects, vec!["Olli"]);
}

#[test]
fn test_not_topi_nor_lasse() {
    let db = designers_database();
    let expr = subject()
        .equals("PiiResourceDatabase")
        .and(not(
            attribute("my:designer")
                .equals("Topi")
                .or(attribute("my:designer").equals("Lasse")),
        ))
        .and(resource_type().equals(ObjectKind::Resource));
    let designers = db.select(&object().as_text(), &expr).expect("select");
    assert_eq!(text_set(designers), text_set(["Olli"]));
}

#[test]
fn test_resource_type_filter() {
    let db = designers_database();
    let resources = db
        .select(&object().as_text(), &resource_type().equals(ObjectKind::Resource))
        .expect("select");
    assert_eq!(
        resources,
        vec!["Topi", "Lasse", "Olli", "Anna", "Tuulikki", "Johanna"]
    );
}

#[test]
fn test_unknown_predicate_matches_nothing() {
    let db = designers_database();
    let found = db
        .select_statements(&predicate().equals("my:hobby"))
        .expect("select");
    assert!(found.is_empty());
}
