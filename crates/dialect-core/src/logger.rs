//! Rendering statements for humans.
//!
//! Executed statements are logged with their bound values inlined, so the
//! logged SQL can be pasted into a database console. The rendering is for
//! reading only; it must never be sent to the database.

use crate::Value;

use chrono::{NaiveDateTime, Timelike};
use regex::{Captures, Regex};

const NULL: &str = "NULL";

/// Inlines `vars` into `sql` for display.
///
/// Placeholders are `?` unless `numeric_placeholder` is given, in which case
/// its first capture group must match the 1-based index of the value (e.g.
/// `\$(\d+)` for `$1`, `$2`, ...). Placeholders without a matching value are
/// left as they are.
///
/// Strings, bytes and timestamps are wrapped in `escaper`; an `escaper`
/// inside a string is prefixed with a backslash.
pub fn explain_sql(
    sql: &str,
    numeric_placeholder: Option<&Regex>,
    escaper: &str,
    vars: &[Value],
) -> String {
    let vars: Vec<String> = vars.iter().map(|var| render(var, escaper)).collect();

    match numeric_placeholder {
        None => {
            let mut out = String::with_capacity(sql.len());
            let mut vars = vars.iter();

            for c in sql.chars() {
                match c {
                    '?' => match vars.next() {
                        Some(var) => out.push_str(var),
                        None => out.push(c),
                    },
                    c => out.push(c),
                }
            }

            out
        }
        Some(re) => re
            .replace_all(sql, |caps: &Captures| {
                caps.get(1)
                    .and_then(|index| index.as_str().parse::<usize>().ok())
                    .and_then(|index| index.checked_sub(1))
                    .and_then(|index| vars.get(index))
                    .cloned()
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned(),
    }
}

fn render(value: &Value, escaper: &str) -> String {
    match value {
        Value::Null => NULL.to_string(),
        Value::Bool(v) => v.to_string(),
        Value::I64(v) => v.to_string(),
        Value::U64(v) => v.to_string(),
        Value::F64(v) => v.to_string(),
        Value::String(v) => quote(v, escaper),
        Value::Bytes(v) => match std::str::from_utf8(v) {
            Ok(s) if s.chars().all(|c| !c.is_control()) => quote(s, escaper),
            _ => format!("{escaper}<binary>{escaper}"),
        },
        Value::Timestamp(v) => format!("{escaper}{}{escaper}", format_timestamp(v)),
    }
}

fn quote(s: &str, escaper: &str) -> String {
    let escaped = s.replace(escaper, &format!("\\{escaper}"));
    format!("{escaper}{escaped}{escaper}")
}

/// Seconds precision, plus milliseconds when there are any (trailing zeros
/// dropped).
fn format_timestamp(ts: &NaiveDateTime) -> String {
    let mut out = ts.format("%Y-%m-%d %H:%M:%S").to_string();

    let millis = (ts.nanosecond() % 1_000_000_000) / 1_000_000;
    if millis > 0 {
        let frac = format!("{millis:03}");
        out.push('.');
        out.push_str(frac.trim_end_matches('0'));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    #[test]
    fn no_vars_is_identity() {
        assert_eq!(explain_sql("select 1", None, "'", &[]), "select 1");
        assert_eq!(
            explain_sql("select ? from t", None, "'", &[]),
            "select ? from t"
        );
    }

    #[test]
    fn question_placeholders_in_order() {
        let vars = [
            Value::from("biscuit"),
            Value::from(2),
            Value::Null,
            Value::from(true),
            Value::from(1.5),
        ];
        assert_eq!(
            explain_sql(
                "INSERT INTO t VALUES (?,?,?,?,?)",
                None,
                "'",
                &vars
            ),
            "INSERT INTO t VALUES ('biscuit',2,NULL,true,1.5)"
        );
    }

    #[test]
    fn escaper_inside_string_is_escaped() {
        assert_eq!(
            explain_sql("SELECT ?", None, "'", &[Value::from("it's")]),
            r"SELECT 'it\'s'"
        );
    }

    #[test]
    fn bytes() {
        let vars = [Value::from(&b"abc"[..]), Value::Bytes(vec![0, 159, 146])];
        assert_eq!(
            explain_sql("?,?", None, "'", &vars),
            "'abc','<binary>'"
        );
    }

    #[test]
    fn timestamps() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let vars = [
            Value::from(date.and_hms_opt(8, 5, 1).unwrap()),
            Value::from(date.and_hms_milli_opt(8, 5, 1, 250).unwrap()),
        ];
        assert_eq!(
            explain_sql("? ?", None, "'", &vars),
            "'2024-03-09 08:05:01' '2024-03-09 08:05:01.25'"
        );
    }

    #[test]
    fn numbered_placeholders() {
        let re = Regex::new(r"\$(\d+)").unwrap();
        let vars = [Value::from("a"), Value::from(7)];
        assert_eq!(
            explain_sql("x = $2 AND y = $1 AND z = $3", Some(&re), "'", &vars),
            "x = 7 AND y = 'a' AND z = $3"
        );
    }
}
