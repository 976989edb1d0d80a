//! CREATE TABLE statement builder.

use crate::error::{QueryError, QueryResult};
use crate::ident::{TableName, validate_identifier, write_quoted};
use crate::stmt::traits::Statement;
use crate::value::Value;

/// One column of a [`CreateTable`].
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnDef {
    name: String,
    sql_type: String,
    not_null: bool,
    auto_increment: bool,
    primary_key: bool,
    default_value: Option<Value>,
}

impl ColumnDef {
    fn new(name: &str, sql_type: &str) -> Self {
        Self {
            name: name.to_string(),
            sql_type: sql_type.to_string(),
            not_null: false,
            auto_increment: false,
            primary_key: false,
            default_value: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sql_type(&self) -> &str {
        &self.sql_type
    }

    pub fn is_primary_key(&self) -> bool {
        self.primary_key
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }

    fn write_sql(&self, out: &mut String) {
        write_quoted(out, &self.name);
        out.push(' ');
        out.push_str(&self.sql_type);
        if self.not_null {
            out.push_str(" NOT NULL");
        }
        if self.auto_increment {
            out.push_str(" AUTO_INCREMENT");
        }
        if self.default_value.is_some() {
            out.push_str(" DEFAULT ?");
        }
    }
}

/// CREATE TABLE builder.
///
/// Column modifiers (`not_null`, `auto_increment`, `primary_key`,
/// `default_value`) apply to the most recently added column. Primary key
/// columns are collected into a single trailing `PRIMARY KEY (...)` clause.
#[derive(Clone, Debug)]
pub struct CreateTable {
    table: TableName,
    if_not_exists: bool,
    columns: Vec<ColumnDef>,
}

impl CreateTable {
    pub(crate) fn new(table: TableName) -> Self {
        Self {
            table,
            if_not_exists: false,
            columns: Vec::new(),
        }
    }

    /// Add `IF NOT EXISTS`.
    pub fn if_not_exists(mut self) -> Self {
        self.if_not_exists = true;
        self
    }

    /// Add a column with an arbitrary type.
    pub fn col(mut self, name: &str, sql_type: &str) -> QueryResult<Self> {
        validate_identifier(name)?;
        if self.columns.iter().any(|c| c.name == name) {
            return Err(QueryError::DuplicateColumn(name.to_string()));
        }
        self.columns.push(ColumnDef::new(name, sql_type));
        Ok(self)
    }

    /// Add an `INT` column.
    pub fn integer(self, name: &str) -> QueryResult<Self> {
        self.col(name, "INT")
    }

    /// Add a `BIGINT` column.
    pub fn bigint(self, name: &str) -> QueryResult<Self> {
        self.col(name, "BIGINT")
    }

    /// Add a `TINYINT(1)` column.
    pub fn boolean(self, name: &str) -> QueryResult<Self> {
        self.col(name, "TINYINT(1)")
    }

    /// Add a `VARCHAR(size)` column.
    pub fn varchar(self, name: &str, size: u32) -> QueryResult<Self> {
        self.col(name, &format!("VARCHAR({size})"))
    }

    /// Add a `CHAR(size)` column.
    pub fn character(self, name: &str, size: u32) -> QueryResult<Self> {
        self.col(name, &format!("CHAR({size})"))
    }

    /// Add a `TEXT` column.
    pub fn text(self, name: &str) -> QueryResult<Self> {
        self.col(name, "TEXT")
    }

    /// Add an `INT AUTO_INCREMENT` primary key column.
    pub fn int_key(self, name: &str) -> QueryResult<Self> {
        self.integer(name)?.auto_increment()?.primary_key()
    }

    pub fn not_null(mut self) -> QueryResult<Self> {
        self.last_column()?.not_null = true;
        Ok(self)
    }

    pub fn auto_increment(mut self) -> QueryResult<Self> {
        self.last_column()?.auto_increment = true;
        Ok(self)
    }

    pub fn primary_key(mut self) -> QueryResult<Self> {
        self.last_column()?.primary_key = true;
        Ok(self)
    }

    /// Set a bound `DEFAULT ?` for the last column. NULL is rejected.
    pub fn default_value(mut self, value: impl Into<Value>) -> QueryResult<Self> {
        let value: Value = value.into();
        let column = self.last_column()?;
        if value.is_null() {
            return Err(QueryError::NullValue(column.name.clone()));
        }
        column.default_value = Some(value);
        Ok(self)
    }

    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    fn last_column(&mut self) -> QueryResult<&mut ColumnDef> {
        self.columns.last_mut().ok_or(QueryError::NoColumns)
    }
}

impl Statement for CreateTable {
    fn to_sql(&self) -> QueryResult<String> {
        let mut sql = String::from("CREATE TABLE ");
        if self.if_not_exists {
            sql.push_str("IF NOT EXISTS ");
        }
        self.table.write_sql(&mut sql);
        sql.push_str(" (");

        let mut first = true;
        for col in &self.columns {
            if !first {
                sql.push_str(", ");
            }
            first = false;
            col.write_sql(&mut sql);
        }

        let mut keys = self.columns.iter().filter(|c| c.primary_key).peekable();
        if keys.peek().is_some() {
            if !first {
                sql.push_str(", ");
            }
            sql.push_str("PRIMARY KEY (");
            for (i, col) in keys.enumerate() {
                if i > 0 {
                    sql.push_str(", ");
                }
                write_quoted(&mut sql, &col.name);
            }
            sql.push(')');
        }

        sql.push_str(");");
        Ok(sql)
    }

    fn params(&self) -> Vec<Value> {
        self.columns
            .iter()
            .filter_map(|c| c.default_value.clone())
            .collect()
    }
}
