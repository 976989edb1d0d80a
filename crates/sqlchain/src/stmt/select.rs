//! SELECT statement builder.

use crate::error::{QueryError, QueryResult};
use crate::ident::{TableName, quote_identifier, validate_identifier};
use crate::stmt::condition::{Conditional, Conditions};
use crate::stmt::expr::Expression;
use crate::stmt::traits::Statement;
use crate::value::Value;

/// What the SELECT list contains.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Selection {
    #[default]
    Unset,
    /// `SELECT *`
    All,
    Exprs(Vec<Expression>),
}

/// SELECT builder.
///
/// Clauses are emitted in the order SELECT list, FROM, WHERE, ORDER BY,
/// LIMIT, OFFSET, FOR UPDATE regardless of call order.
#[derive(Clone, Debug, Default)]
pub struct Select {
    selection: Selection,
    from: Option<TableName>,
    conditions: Conditions,
    order: Option<Expression>,
    desc: bool,
    limit: Option<i64>,
    offset: Option<i64>,
    for_update: bool,
}

impl Select {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select every column (`*`).
    pub fn all(mut self) -> QueryResult<Self> {
        if matches!(self.selection, Selection::Exprs(_)) {
            return Err(QueryError::MixedSelection);
        }
        self.selection = Selection::All;
        Ok(self)
    }

    /// Select a single column.
    pub fn col(self, column: &str) -> QueryResult<Self> {
        validate_identifier(column)?;
        self.expr(&quote_identifier(column), crate::args![])
    }

    /// Select several columns in order.
    pub fn cols<S: AsRef<str>>(self, columns: impl IntoIterator<Item = S>) -> QueryResult<Self> {
        columns
            .into_iter()
            .try_fold(self, |stmt, column| stmt.col(column.as_ref()))
    }

    /// Select an arbitrary expression such as `COUNT(*)` or `` `a` + ? ``.
    pub fn expr<I>(mut self, expr: &str, args: I) -> QueryResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let expr = Expression::new(expr, args)?;
        match &mut self.selection {
            Selection::All => return Err(QueryError::MixedSelection),
            Selection::Exprs(exprs) => exprs.push(expr),
            Selection::Unset => self.selection = Selection::Exprs(vec![expr]),
        }
        Ok(self)
    }

    pub fn from(mut self, table: &str) -> QueryResult<Self> {
        self.from = Some(TableName::new(None, table)?);
        Ok(self)
    }

    pub fn from_in(mut self, database: &str, table: &str) -> QueryResult<Self> {
        self.from = Some(TableName::new(Some(database), table)?);
        Ok(self)
    }

    /// Order by a column. Replaces any previous ordering but keeps `desc`.
    pub fn order_by(self, column: &str) -> QueryResult<Self> {
        validate_identifier(column)?;
        self.order_by_expr(&quote_identifier(column), crate::args![])
    }

    /// Order by an expression. Replaces any previous ordering but keeps `desc`.
    pub fn order_by_expr<I>(mut self, expr: &str, args: I) -> QueryResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.order = Some(Expression::new(expr, args)?);
        Ok(self)
    }

    /// Sort descending. Requires an ordering expression.
    pub fn desc(mut self) -> QueryResult<Self> {
        if self.order.is_none() {
            return Err(QueryError::NoOrderExpression);
        }
        self.desc = true;
        Ok(self)
    }

    pub fn limit(mut self, limit: i64) -> QueryResult<Self> {
        if limit < 1 {
            return Err(QueryError::InvalidLimit(limit));
        }
        self.limit = Some(limit);
        Ok(self)
    }

    pub fn offset(mut self, offset: i64) -> QueryResult<Self> {
        if offset < 0 {
            return Err(QueryError::InvalidOffset(offset));
        }
        self.offset = Some(offset);
        Ok(self)
    }

    /// Append `FOR UPDATE`.
    pub fn for_update(mut self) -> Self {
        self.for_update = true;
        self
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    fn write_tail(&self, sql: &mut String) {
        let mut tail: Vec<String> = Vec::new();
        if let Some(order) = &self.order {
            let dir = if self.desc { "DESC" } else { "ASC" };
            tail.push(format!("ORDER BY ({}) {dir}", order.fragment()));
        }
        if let Some(limit) = self.limit {
            tail.push(format!("LIMIT {limit}"));
        }
        if let Some(offset) = self.offset {
            tail.push(format!("OFFSET {offset}"));
        }
        if self.for_update {
            tail.push("FOR UPDATE".to_string());
        }
        sql.push_str(&tail.join(" "));
    }
}

impl Conditional for Select {
    fn conditions(&self) -> &Conditions {
        &self.conditions
    }

    fn conditions_mut(&mut self) -> &mut Conditions {
        &mut self.conditions
    }
}

impl Statement for Select {
    fn to_sql(&self) -> QueryResult<String> {
        let mut sql = String::from("SELECT ");
        match &self.selection {
            Selection::Unset => return Err(QueryError::EmptySelection),
            Selection::All => sql.push('*'),
            Selection::Exprs(exprs) => {
                for (i, expr) in exprs.iter().enumerate() {
                    if i > 0 {
                        sql.push_str(", ");
                    }
                    sql.push_str(expr.fragment());
                }
            }
        }
        sql.push(' ');
        if let Some(table) = &self.from {
            sql.push_str("FROM ");
            table.write_sql(&mut sql);
            sql.push(' ');
        }
        self.conditions.write_sql(&mut sql);
        self.write_tail(&mut sql);
        sql.push(';');
        Ok(sql)
    }

    fn params(&self) -> Vec<Value> {
        let mut params = Vec::new();
        if let Selection::Exprs(exprs) = &self.selection {
            for expr in exprs {
                params.extend_from_slice(expr.args());
            }
        }
        self.conditions.extend_params(&mut params);
        if let Some(order) = &self.order {
            params.extend_from_slice(order.args());
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_all() {
        let stmt = Select::new().all().unwrap().from("t").unwrap();
        assert_eq!(stmt.to_sql().unwrap(), "SELECT * FROM `t` ;");
    }

    #[test]
    fn test_select_without_from() {
        let stmt = Select::new().expr("? + 1", [41]).unwrap();
        assert_eq!(stmt.to_sql().unwrap(), "SELECT ? + 1 ;");
        assert_eq!(stmt.params(), crate::args![41]);
    }

    #[test]
    fn test_tail_order() {
        let stmt = Select::new()
            .all()
            .unwrap()
            .from("t")
            .unwrap()
            .for_update()
            .offset(20)
            .unwrap()
            .limit(10)
            .unwrap()
            .order_by("id")
            .unwrap()
            .desc()
            .unwrap();
        assert_eq!(
            stmt.to_sql().unwrap(),
            "SELECT * FROM `t` ORDER BY (`id`) DESC LIMIT 10 OFFSET 20 FOR UPDATE;"
        );
    }

    #[test]
    fn test_desc_survives_reorder() {
        let stmt = Select::new()
            .all()
            .unwrap()
            .from("t")
            .unwrap()
            .order_by("a")
            .unwrap()
            .desc()
            .unwrap()
            .order_by_expr("`b` * ?", [2])
            .unwrap();
        assert_eq!(
            stmt.to_sql().unwrap(),
            "SELECT * FROM `t` ORDER BY (`b` * ?) DESC;"
        );
        assert_eq!(stmt.params(), crate::args![2]);
    }

    #[test]
    fn test_order_params_follow_where() {
        let stmt = Select::new()
            .expr("`a` + ?", [1])
            .unwrap()
            .from("t")
            .unwrap()
            .order_by_expr("ABS(`b` - ?)", [3])
            .unwrap()
            .where_eq("c", 2)
            .unwrap();
        assert_eq!(
            stmt.to_sql().unwrap(),
            "SELECT `a` + ? FROM `t` WHERE (`c` = ?) ORDER BY (ABS(`b` - ?)) ASC;"
        );
        assert_eq!(stmt.params(), crate::args![1, 2, 3]);
    }

    #[test]
    fn test_invalid_modifiers() {
        assert!(matches!(Select::new().desc(), Err(QueryError::NoOrderExpression)));
        assert!(matches!(Select::new().limit(0), Err(QueryError::InvalidLimit(0))));
        assert!(matches!(Select::new().offset(-1), Err(QueryError::InvalidOffset(-1))));
        assert!(Select::new().offset(0).is_ok());
        assert!(matches!(Select::new().to_sql(), Err(QueryError::EmptySelection)));
    }
}
