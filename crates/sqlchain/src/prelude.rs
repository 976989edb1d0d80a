//! Convenient imports for typical `sqlchain` usage.
//!
//! Brings the builder traits into scope so the chained `where_*` and
//! `execute`/`fetch_*` methods resolve:
//!
//! ```ignore
//! use sqlchain::prelude::*;
//! ```

pub use crate::{
    BatchBuilder, Conditional, Executor, QueryError, QueryResult, ResultSet, RowCursor, Statement,
    Value, args,
};
