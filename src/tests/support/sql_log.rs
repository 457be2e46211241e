use sea_orm::DatabaseConnection;
use std::sync::Arc;

/// Statements a `MockDatabase` connection received, with parameters inlined.
/// Every adapter holding a clone of `db` must be dropped first.
pub fn logged_sql(db: Arc<DatabaseConnection>) -> Vec<String> {
    let Ok(db) = Arc::try_unwrap(db) else {
        panic!("connection is still shared by an adapter");
    };

    db.into_transaction_log()
        .iter()
        .flat_map(|txn| txn.statements().iter().map(|stmt| stmt.to_string()))
        .collect()
}

/// The `SET ..` list of an UPDATE, without the WHERE clause.
pub fn set_clause(sql: &str) -> &str {
    let start = sql.find(" SET ").map(|i| i + 5).unwrap_or(0);
    let end = sql.find(" WHERE ").unwrap_or(sql.len());
    &sql[start..end]
}
