//! Test AND / OR / NOT laws on the designers database.

use crate::e2e_tests::helpers::designers_database;
use crate::query::Expr;
use crate::query::dsl::{
    attribute, everything, not, object, parse_int, predicate, statement_id, subject,
};
use crate::store::ResourceDatabase;

fn ids(db: &ResourceDatabase, expr: &Expr) -> Vec<i64> {
    db.select(&statement_id().as_int(), expr).expect("select")
}

#[test]
fn test_everything_returns_all_ids_in_order() {
    let db = designers_database();
    assert_eq!(ids(&db, &everything()), (0..15).collect::<Vec<i64>>());
}

#[test]
fn test_not_is_complement() {
    let db = designers_database();
    let topi = subject().equals("Topi");
    let mut combined = ids(&db, &topi);
    combined.extend(ids(&db, &not(topi.clone_value())));
    combined.sort_unstable();
    assert_eq!(combined, (0..15).collect::<Vec<i64>>());
}

#[test]
fn test_double_negation() {
    let db = designers_database();
    let expr = predicate().equals("my:wife");
    assert_eq!(ids(&db, &not(not(expr.clone_value()))), ids(&db, &expr));
}

#[test]
fn test_de_morgan() {
    let db = designers_database();
    let a = subject().equals("Lasse");
    let b = predicate().equals("my:title");
    assert_eq!(
        ids(&db, &not(a.clone_value().or(b.clone_value()))),
        ids(&db, &not(a).and(not(b)))
    );
}

#[test]
fn test_and_with_everything_is_identity() {
    let db = designers_database();
    let expr = attribute("my:kids").equals("3");
    assert_eq!(ids(&db, &expr.clone_value().and(everything())), vec![13]);
    assert_eq!(ids(&db, &expr), vec![13]);
}

#[test]
fn test_negated_conversion_failure_matches() {
    let db = designers_database();
    // Only the kids statements parse; every other statement has no value,
    // so its comparison is false and the negation true.
    let many = parse_int(object()).greater_than(2);
    assert_eq!(ids(&db, &many), vec![12, 13]);
    let others = ids(&db, &not(many));
    assert_eq!(others.len(), 13);
    assert!(others.contains(&14));
    assert!(others.contains(&6));
}
