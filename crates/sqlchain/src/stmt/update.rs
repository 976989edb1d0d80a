//! UPDATE statement builder.

use crate::error::{QueryError, QueryResult};
use crate::ident::TableName;
use crate::stmt::assignments::{Assignments, impl_value_setters};
use crate::stmt::condition::{Conditional, Conditions};
use crate::stmt::traits::Statement;
use crate::value::Value;

/// UPDATE builder: `` UPDATE `t` SET ... WHERE ... ; ``
#[derive(Clone, Debug)]
pub struct Update {
    table: TableName,
    values: Assignments,
    conditions: Conditions,
}

impl Update {
    pub(crate) fn new(table: TableName) -> Self {
        Self {
            table,
            values: Assignments::new(),
            conditions: Conditions::new(),
        }
    }

    pub fn values(&self) -> &Assignments {
        &self.values
    }
}

impl_value_setters!(Update, values);

impl Conditional for Update {
    fn conditions(&self) -> &Conditions {
        &self.conditions
    }

    fn conditions_mut(&mut self) -> &mut Conditions {
        &mut self.conditions
    }
}

impl Statement for Update {
    fn to_sql(&self) -> QueryResult<String> {
        if self.values.is_empty() {
            return Err(QueryError::EmptyUpdate);
        }
        let mut sql = String::from("UPDATE ");
        self.table.write_sql(&mut sql);
        sql.push_str(" SET ");
        self.values.write_set(&mut sql);
        sql.push(' ');
        self.conditions.write_sql(&mut sql);
        sql.push(';');
        Ok(sql)
    }

    fn params(&self) -> Vec<Value> {
        let mut params = Vec::new();
        self.values.extend_params(&mut params);
        self.conditions.extend_params(&mut params);
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(name: &str) -> Update {
        Update::new(TableName::new(None, name).unwrap())
    }

    #[test]
    fn test_update_without_where() {
        let stmt = update("t").value("a", 1).unwrap();
        assert_eq!(stmt.to_sql().unwrap(), "UPDATE `t` SET `a` = ? ;");
    }

    #[test]
    fn test_set_params_precede_where() {
        let stmt = update("t")
            .where_eq("id", 7)
            .unwrap()
            .value("a", "x")
            .unwrap();
        assert_eq!(stmt.to_sql().unwrap(), "UPDATE `t` SET `a` = ? WHERE (`id` = ?) ;");
        assert_eq!(stmt.params(), crate::args!["x", 7]);
    }

    #[test]
    fn test_empty_update() {
        let stmt = update("t").where_eq("id", 1).unwrap();
        assert!(matches!(stmt.to_sql(), Err(QueryError::EmptyUpdate)));
    }
}
