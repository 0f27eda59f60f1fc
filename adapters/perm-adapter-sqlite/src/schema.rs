//! Database schema initialization and migrations

use sqlx::{Sqlite, SqlitePool, Transaction};

/// Get the current database version from vars table
async fn get_db_version(tx: &mut Transaction<'_, Sqlite>) -> i64 {
	sqlx::query_scalar::<_, String>("SELECT value FROM vars WHERE key = 'db_version'")
		.fetch_optional(&mut **tx)
		.await
		.ok()
		.flatten()
		.and_then(|v| v.parse().ok())
		.unwrap_or(0)
}

/// Set the database version in vars table
async fn set_db_version(tx: &mut Transaction<'_, Sqlite>, version: i64) {
	let _ = sqlx::query("INSERT OR REPLACE INTO vars (key, value) VALUES ('db_version', ?)")
		.bind(version.to_string())
		.execute(&mut **tx)
		.await;
}

// Current schema version - update this when adding new migrations
const CURRENT_DB_VERSION: i64 = 1;

/// Initialize the database schema and run migrations
pub(crate) async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	let mut tx = db.begin().await?;

	// Create vars table first (needed for version tracking)
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS vars (
		key text NOT NULL,
		value text NOT NULL,
		created_at INTEGER DEFAULT (unixepoch()),
		updated_at INTEGER DEFAULT (unixepoch()),
		PRIMARY KEY(key)
	)",
	)
	.execute(&mut *tx)
	.await?;

	let version = get_db_version(&mut tx).await;

	// Schema creation - safe to run every time (uses IF NOT EXISTS)

	// Accounts
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS accounts (
			account_id INTEGER PRIMARY KEY AUTOINCREMENT,
			owner integer NOT NULL,
			expires_at INTEGER,
			created_at INTEGER DEFAULT (unixepoch()),
			updated_at INTEGER DEFAULT (unixepoch())
		)",
	)
	.execute(&mut *tx)
	.await?;

	// Account users
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS account_users (
			user_id integer NOT NULL,
			account_id integer NOT NULL,
			is_staff integer NOT NULL DEFAULT 0,
			created_at INTEGER DEFAULT (unixepoch()),
			PRIMARY KEY(user_id)
		)",
	)
	.execute(&mut *tx)
	.await?;

	// Permission grants
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS grants (
			grantee_kind char(1) NOT NULL,
			grantee_id integer NOT NULL,
			perm text NOT NULL,
			created_at INTEGER DEFAULT (unixepoch()),
			PRIMARY KEY(grantee_kind, grantee_id, perm)
		)",
	)
	.execute(&mut *tx)
	.await?;

	// Restrictions
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS restrictions (
			restriction_id INTEGER PRIMARY KEY AUTOINCREMENT,
			grantee_kind char(1) NOT NULL,
			grantee_id integer NOT NULL,
			perm text NOT NULL,
			field text NOT NULL,
			vals text NOT NULL,
			created_at INTEGER DEFAULT (unixepoch())
		)",
	)
	.execute(&mut *tx)
	.await?;

	sqlx::query(
		"CREATE INDEX IF NOT EXISTS idx_restrictions_perm
			ON restrictions(perm, grantee_kind, grantee_id)",
	)
	.execute(&mut *tx)
	.await?;

	if version < CURRENT_DB_VERSION {
		set_db_version(&mut tx, CURRENT_DB_VERSION).await;
	}

	tx.commit().await?;

	Ok(())
}

// vim: ts=4
