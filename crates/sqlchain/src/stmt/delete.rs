//! DELETE statement builder.

use crate::error::QueryResult;
use crate::ident::TableName;
use crate::stmt::condition::{Conditional, Conditions};
use crate::stmt::traits::Statement;
use crate::value::Value;

/// DELETE builder. Without conditions it deletes every row.
#[derive(Clone, Debug)]
pub struct Delete {
    table: TableName,
    conditions: Conditions,
}

impl Delete {
    pub(crate) fn new(table: TableName) -> Self {
        Self {
            table,
            conditions: Conditions::new(),
        }
    }
}

impl Conditional for Delete {
    fn conditions(&self) -> &Conditions {
        &self.conditions
    }

    fn conditions_mut(&mut self) -> &mut Conditions {
        &mut self.conditions
    }
}

impl Statement for Delete {
    fn to_sql(&self) -> QueryResult<String> {
        let mut sql = String::from("DELETE FROM ");
        self.table.write_sql(&mut sql);
        sql.push(' ');
        self.conditions.write_sql(&mut sql);
        sql.push(';');
        Ok(sql)
    }

    fn params(&self) -> Vec<Value> {
        let mut params = Vec::new();
        self.conditions.extend_params(&mut params);
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_null_condition() {
        let stmt = Delete::new(TableName::new(Some("db"), "t").unwrap())
            .where_null("gone")
            .unwrap();
        assert_eq!(
            stmt.to_sql().unwrap(),
            "DELETE FROM `db`.`t` WHERE (`gone` IS NULL) ;"
        );
        assert!(stmt.params().is_empty());
    }
}
