//! Test importing a statement file and querying it.

use std::io::Write;

use tempfile::NamedTempFile;

use crate::e2e_tests::helpers::designers_database;
use crate::import::{ImportError, import_file, import_str};
use crate::query::dsl::{attribute, object, predicate, reified_id, subject};
use crate::store::ResourceDatabase;

const DESIGNERS: &str = "\
# designers and their evaluations
resource\tPiiResourceDatabase\tmy:designer\tTopi
literal\t[0]\tmy:evaluation\ttrue
resource\tPiiResourceDatabase\tmy:designer\tLasse
literal\t[2]\tmy:evaluation\ttrue
resource\tPiiResourceDatabase\tmy:designer\tOlli
literal\t[4]\tmy:evaluation\tfalse

literal\tTopi\tmy:title\tCTO
resource\tTopi\tmy:wife\tAnna
literal\tLasse\tmy:title\tSoftware Engineer
resource\tLasse\tmy:wife\tTuulikki
literal\tOlli\tmy:title\tKeisari
resource\tOlli\tmy:wife\tJohanna
literal\tTopi\tmy:kids\t6
literal\tLasse\tmy:kids\t3
literal\tOlli\tmy:kids\t1
";

#[test]
fn test_imported_file_equals_built_database() {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(DESIGNERS.as_bytes()).expect("write");

    let mut imported = ResourceDatabase::new();
    assert_eq!(import_file(&mut imported, file.path()).expect("import"), 15);

    let built = designers_database();
    assert!(imported.statements().eq(built.statements()));
}

#[test]
fn test_dump_of_imported_file() {
    let mut db = ResourceDatabase::new();
    import_str(&mut db, DESIGNERS).expect("import");

    let mut out = Vec::new();
    db.write_dump(&mut out).expect("write dump");
    let dump = String::from_utf8(out).expect("utf8");
    let lines: Vec<&str> = dump.lines().collect();
    assert_eq!(lines.len(), 15);
    assert_eq!(lines[1], "1: [0] my:evaluation \"true\"");
    assert_eq!(lines[14], "14: Olli my:kids \"1\"");
}

#[test]
fn test_query_imported_reifications() {
    let mut db = ResourceDatabase::new();
    import_str(&mut db, DESIGNERS).expect("import");
    let rejected = db
        .select(&reified_id(subject()).as_int(), &attribute("my:evaluation").equals("false"))
        .expect("select");
    assert_eq!(rejected, vec![4]);
    let designer = db
        .select(&object().as_text(), &predicate().equals("my:designer"))
        .expect("select");
    assert_eq!(designer[2], "Olli");
}

#[test]
fn test_partial_import_keeps_earlier_statements() {
    let mut db = ResourceDatabase::new();
    let text = format!("{DESIGNERS}literal\tOlli\tmy:car\n");
    let err = import_str(&mut db, &text).expect_err("should fail");
    assert!(matches!(err, ImportError::Parse { line: 18, .. }));
    assert_eq!(db.statement_count(), 15);
}
