//! INSERT statement builder.

use crate::error::{QueryError, QueryResult};
use crate::ident::TableName;
use crate::stmt::assignments::{Assignments, impl_value_setters};
use crate::stmt::traits::Statement;
use crate::value::Value;

/// INSERT builder with optional `IGNORE` and `ON DUPLICATE KEY UPDATE`.
///
/// ```ignore
/// let stmt = insert_into("t")?
///     .value("a", 123)?
///     .value_expr("b", "1 + ?", [456])?
///     .on_duplicate_key_update_except(["a"]);
/// ```
#[derive(Clone, Debug)]
pub struct Insert {
    table: TableName,
    ignore: bool,
    values: Assignments,
    on_duplicate: Assignments,
}

impl Insert {
    pub(crate) fn new(table: TableName) -> Self {
        Self {
            table,
            ignore: false,
            values: Assignments::new(),
            on_duplicate: Assignments::new(),
        }
    }

    /// Render `INSERT IGNORE`.
    pub fn ignore(mut self) -> Self {
        self.ignore = true;
        self
    }

    /// Update every inserted column except `keys` on conflict.
    ///
    /// Snapshots the current values; call it after the last `value*`.
    pub fn on_duplicate_key_update_except<S: AsRef<str>>(
        mut self,
        keys: impl IntoIterator<Item = S>,
    ) -> Self {
        self.on_duplicate = self.values.without(keys);
        self
    }

    /// Update every inserted column on conflict.
    pub fn on_duplicate_key_update(self) -> Self {
        self.on_duplicate_key_update_except(std::iter::empty::<&str>())
    }

    pub fn values(&self) -> &Assignments {
        &self.values
    }

    pub fn on_duplicate(&self) -> &Assignments {
        &self.on_duplicate
    }
}

impl_value_setters!(Insert, values);

impl Statement for Insert {
    fn to_sql(&self) -> QueryResult<String> {
        if self.values.is_empty() {
            return Err(QueryError::EmptyInsert);
        }
        if self.ignore && !self.on_duplicate.is_empty() {
            return Err(QueryError::ConflictingModifiers);
        }

        let mut sql = String::from("INSERT ");
        if self.ignore {
            sql.push_str("IGNORE ");
        }
        sql.push_str("INTO ");
        self.table.write_sql(&mut sql);
        sql.push_str(" (");
        self.values.write_columns(&mut sql);
        sql.push_str(") VALUES (");
        self.values.write_values(&mut sql);
        sql.push(')');
        if !self.on_duplicate.is_empty() {
            sql.push_str(" ON DUPLICATE KEY UPDATE ");
            self.on_duplicate.write_set(&mut sql);
        }
        sql.push(';');
        Ok(sql)
    }

    fn params(&self) -> Vec<Value> {
        let mut params = Vec::new();
        self.values.extend_params(&mut params);
        self.on_duplicate.extend_params(&mut params);
        params
    }
}
