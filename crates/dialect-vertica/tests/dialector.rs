mod common;
use common::{open_db, RecordingPool};

use chrono::NaiveDate;
use dialect_core::{
    schema::{DataType, Field},
    ConnPool, Db, Dialect, Error, Result, Value,
};
use dialect_vertica::{Config, Dialector};
use pretty_assertions::assert_eq;
use std::sync::{Arc, Mutex};

/// A connector that records the DSNs it was asked to open.
fn recording_connector(
    dsns: Arc<Mutex<Vec<String>>>,
) -> impl Fn(&str) -> Result<Arc<dyn ConnPool>> + Send + Sync + 'static {
    move |dsn: &str| -> Result<Arc<dyn ConnPool>> {
        dsns.lock().unwrap().push(dsn.to_string());
        Ok(Arc::new(RecordingPool::default()))
    }
}

#[test]
fn name_is_vertica() {
    assert_eq!(dialect_vertica::open("").name(), "vertica");
}

#[test]
fn opens_pool_through_vertica_driver() {
    let dsns = Arc::new(Mutex::new(vec![]));
    let dsn = "vertica://dbadmin:@vertica:5433/docker";

    let db = Db::builder()
        .driver("vertica", recording_connector(dsns.clone()))
        .open(dialect_vertica::open(dsn))
        .unwrap();

    assert!(db.conn_pool().is_ok());
    assert_eq!(*dsns.lock().unwrap(), vec![dsn.to_string()]);
}

#[test]
fn provided_pool_is_used_without_a_driver() {
    let (db, _pool) = open_db();
    assert!(db.conn_pool().is_ok());
}

#[test]
fn missing_driver_fails_initialization() {
    let err = Db::builder()
        .open(dialect_vertica::open("vertica://localhost/docker"))
        .unwrap_err();

    assert!(err.is_unknown_driver());
}

#[test]
fn connector_error_is_returned_unchanged() {
    let err = Db::builder()
        .driver("vertica", |_: &str| -> Result<Arc<dyn ConnPool>> {
            Err(Error::connection_pool(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            )))
        })
        .open(dialect_vertica::open("vertica://localhost/docker"))
        .unwrap_err();

    assert!(err.is_connection_pool());
    assert_eq!(err.to_string(), "connection refused");
}

#[test]
fn malformed_dsn_is_rejected_before_connecting() {
    let dsns = Arc::new(Mutex::new(vec![]));

    let err = Db::builder()
        .driver("vertica", recording_connector(dsns.clone()))
        .open(dialect_vertica::open("mysql://localhost/docker"))
        .unwrap_err();

    assert!(err.is_invalid_connection_url());
    assert!(dsns.lock().unwrap().is_empty());
}

#[test]
fn custom_driver_receives_dsn_verbatim() {
    let dsns = Arc::new(Mutex::new(vec![]));
    let dsn = "Driver=Vertica;Servername=localhost;Database=docker";

    Db::builder()
        .driver("odbc", recording_connector(dsns.clone()))
        .open(dialect_vertica::new(Config {
            driver_name: "odbc".to_string(),
            dsn: dsn.to_string(),
            ..Config::default()
        }))
        .unwrap();

    assert_eq!(*dsns.lock().unwrap(), vec![dsn.to_string()]);
}

#[test]
fn values_clause_builder_is_installed() {
    let (db, _pool) = open_db();
    assert!(db.clause_builder("VALUES").is_some());
    assert!(db.clause_builder("WHERE").is_none());
}

#[test]
fn migrator_is_unsupported() {
    let (db, _pool) = open_db();

    let Err(err) = db.migrator() else {
        panic!("expected the vertica dialect to have no migrator");
    };
    assert!(err.is_unsupported_feature());
    assert_eq!(
        err.to_string(),
        "unsupported feature: schema migration is not supported by the `vertica` dialect"
    );
}

#[test]
fn bind_var_is_a_question_mark() {
    let dialector = dialect_vertica::open("");

    let mut out = String::new();
    dialector.bind_var_to(&mut out, 1, &Value::from("a"));
    dialector.bind_var_to(&mut out, 2, &Value::Null);
    assert_eq!(out, "??");
}

#[test]
fn default_value_is_default_keyword() {
    let (db, _pool) = open_db();
    let field = Field::new("name", DataType::String).has_default_value();

    let mut stmt = db.statement();
    stmt.add_clause(db.dialect().default_value_of(&field));
    stmt.build(&["EXPR"]);

    assert_eq!(stmt.sql(), "DEFAULT");
    assert!(stmt.vars().is_empty());
}

#[test]
fn explain_literal_statement_is_identity() {
    let dialector = dialect_vertica::open("");
    assert_eq!(dialector.explain("select 1", &[]), "select 1");
}

#[test]
fn explain_quotes_with_single_quotes() {
    let dialector = dialect_vertica::open("");
    let vars = [Value::from(2), Value::from("biscuit"), Value::from(true)];

    assert_eq!(
        dialector.explain(
            r#"UPDATE "test_tables" SET "id"=?,"name"=? WHERE active = ?"#,
            &vars
        ),
        r#"UPDATE "test_tables" SET "id"=2,"name"='biscuit' WHERE active = true"#
    );
}

#[test]
fn explain_timestamps_and_nulls() {
    let dialector = dialect_vertica::open("");
    let at = NaiveDate::from_ymd_opt(2021, 11, 30)
        .unwrap()
        .and_hms_milli_opt(23, 59, 58, 500)
        .unwrap();
    let vars = [Value::from(at), Value::Null, Value::from("it's")];

    assert_eq!(
        dialector.explain("INSERT INTO t VALUES (?,?,?)", &vars),
        r"INSERT INTO t VALUES ('2021-11-30 23:59:58.5',NULL,'it\'s')"
    );
}

#[test]
fn quote_through_dialect() {
    let dialector: Dialector = dialect_vertica::open("");

    let mut out = String::from("select * from ");
    dialector.quote_to(&mut out, "schema.database.table");
    assert_eq!(out, r#"select * from "schema"."database"."table""#);

    let mut out = String::new();
    dialector.quote_to(&mut out, "test");
    assert_eq!(out, r#""test""#);
}

#[test]
fn default_string_size_comes_from_config() {
    let dialector = dialect_vertica::new(Config {
        default_string_size: 255,
        ..Config::default()
    });

    let name = Field::new("name", DataType::String);
    assert_eq!(dialector.data_type_of(&name), "varchar(255)");
    assert_eq!(
        dialect_vertica::open("").data_type_of(&name),
        "longtext"
    );
}
