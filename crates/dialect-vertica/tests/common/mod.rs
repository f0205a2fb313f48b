#![allow(dead_code)]

use dialect_core::{async_trait, ConnPool, Db, Result, Value};
use dialect_vertica::Config;

use std::sync::{Arc, Mutex};

/// A statement as it reached the pool.
#[derive(Debug, Clone, PartialEq)]
pub struct Executed {
    pub sql: String,
    pub args: Vec<Value>,
}

/// A pool that records every statement and reports one affected row.
#[derive(Debug, Default)]
pub struct RecordingPool {
    log: Mutex<Vec<Executed>>,
}

impl RecordingPool {
    pub fn executed(&self) -> Vec<Executed> {
        self.log.lock().unwrap().clone()
    }
}

#[async_trait]
impl ConnPool for RecordingPool {
    async fn exec(&self, sql: &str, args: &[Value]) -> Result<u64> {
        self.log.lock().unwrap().push(Executed {
            sql: sql.to_string(),
            args: args.to_vec(),
        });
        Ok(1)
    }
}

/// Opens a Vertica database backed by a [`RecordingPool`].
pub fn open_db() -> (Db, Arc<RecordingPool>) {
    let pool = Arc::new(RecordingPool::default());

    let db = Db::builder()
        .open(dialect_vertica::new(Config {
            conn: Some(pool.clone()),
            ..Config::default()
        }))
        .unwrap();

    (db, pool)
}
