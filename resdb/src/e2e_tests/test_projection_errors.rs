//! Test that a projection failure fails the whole select.

use crate::e2e_tests::helpers::designers_database;
use crate::query::QueryError;
use crate::query::dsl::{
    attribute, everything, object, parse_int, predicate, statement_id, subject, subquery,
};

#[test]
fn test_parse_int_of_non_number_fails() {
    let db = designers_database();
    let result = db.select(&parse_int(object()), &predicate().equals("my:title"));
    assert_eq!(
        result,
        Err(QueryError::Conversion {
            statement_id: 6,
            input: "CTO".to_owned(),
            target: "integer",
        })
    );
}

#[test]
fn test_attribute_projection_on_other_predicate_fails() {
    let db = designers_database();
    let result = db.select(&attribute("my:kids"), &subject().equals("Topi"));
    let error = result.expect_err("should fail");
    assert_eq!(error.statement_id(), 6);
    assert!(matches!(error, QueryError::MissingAttribute { .. }));
}

#[test]
fn test_typed_projection_mismatch_fails() {
    let db = designers_database();
    let result = db.select(&statement_id().as_text(), &everything());
    assert!(matches!(
        result,
        Err(QueryError::TypeMismatch {
            statement_id: 0,
            expected: "text",
            found: "integer",
        })
    ));
}

#[test]
fn test_failing_subquery_fails_outer_select() {
    let db = designers_database();
    let broken = subquery(parse_int(object()), predicate().equals("my:wife"));
    let result = db.select(&subject(), &subject().equals(broken));
    assert!(matches!(
        result,
        Err(QueryError::Conversion { statement_id: 7, .. })
    ));
}

#[test]
fn test_failure_outside_matches_is_ignored() {
    let db = designers_database();
    // Titles never reach the projection.
    let kids = db
        .select(&parse_int(object()).as_int(), &predicate().equals("my:kids"))
        .expect("select");
    assert_eq!(kids.iter().sum::<i64>(), 10);
}
