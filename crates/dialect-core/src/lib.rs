#[macro_use]
mod error;
pub use error::{Error, IntoError};

pub mod callbacks;
pub use callbacks::{CallbackConfig, Operation};

pub mod clause;

pub mod db;
pub use db::Db;

mod dialect;
pub use dialect::Dialect;

pub mod driver;
pub use driver::{ConnPool, Connector};

pub mod logger;

mod migrator;
pub use migrator::Migrator;

pub mod schema;

mod statement;
pub use statement::Statement;

mod value;
pub use value::Value;

/// A Result type alias that uses this crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

pub use async_trait::async_trait;
