mod common;

use common::RecordingExecutor;
use sqlchain::prelude::*;
use sqlchain::stmt;

fn insert(name: &str) -> QueryResult<stmt::Insert> {
    stmt::insert_into("users")?.value("name", name)
}

#[tokio::test]
async fn batch_runs_each_entry_in_order() -> QueryResult<()> {
    let conn = RecordingExecutor::new();
    let batch = ["alice", "bob", "carol"]
        .into_iter()
        .try_fold(BatchBuilder::new(), |batch, name| batch.add(&insert(name)?))?;

    let codes = batch.execute(&conn).await?;
    assert_eq!(codes, [1, 1, 1]);

    let calls = conn.calls();
    assert_eq!(calls.len(), 3);
    assert!(
        calls
            .iter()
            .all(|(sql, _)| sql == "INSERT INTO `users` (`name`) VALUES (?);")
    );
    let params: Vec<Vec<Value>> = calls.into_iter().map(|(_, p)| p).collect();
    assert_eq!(params, [args!["alice"], args!["bob"], args!["carol"]]);
    Ok(())
}

#[tokio::test]
async fn empty_batch_skips_executor() -> QueryResult<()> {
    let conn = RecordingExecutor::new();
    let batch = BatchBuilder::new();
    assert!(batch.is_empty());
    assert_eq!(batch.execute(&conn).await?, Vec::<i64>::new());
    assert!(conn.calls().is_empty());
    Ok(())
}

#[test]
fn mismatched_text_is_rejected() -> QueryResult<()> {
    let batch = BatchBuilder::new().add(&insert("alice")?)?;
    let by_email = stmt::insert_into("users")?.value("email", "bob@example.com")?;
    let err = batch.clone().add(&by_email).unwrap_err();
    match err {
        QueryError::BatchTextMismatch { expected, found } => {
            assert_eq!(expected, "INSERT INTO `users` (`name`) VALUES (?);");
            assert_eq!(found, "INSERT INTO `users` (`email`) VALUES (?);");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(batch.len(), 1);
    Ok(())
}

#[test]
fn raw_statements_batch_by_text() -> QueryResult<()> {
    let batch = BatchBuilder::new()
        .add(&stmt::raw("DELETE FROM `t` WHERE (`id` = ?) ;", [1])?)?
        .add(&stmt::delete_from("t")?.where_eq("id", 2)?)?;
    assert_eq!(batch.len(), 2);
    Ok(())
}
