//! Account and account-user provisioning

use sqlx::{error::ErrorKind, sqlite::SqliteRow, Row, SqlitePool};

use pressroom::model::{Account, AccountUser};
use pressroom::prelude::*;

use crate::{inspect, map_res};

fn map_account(row: SqliteRow) -> Result<Account, sqlx::Error> {
	Ok(Account {
		account_id: AccountId(row.get::<i64, _>("account_id") as u32),
		owner: UserId(row.get::<i64, _>("owner") as u32),
		expires_at: row.get::<Option<i64>, _>("expires_at").map(Timestamp),
		created_at: Timestamp(row.get("created_at")),
		updated_at: Timestamp(row.get("updated_at")),
	})
}

fn map_account_user(row: SqliteRow) -> Result<AccountUser, sqlx::Error> {
	Ok(AccountUser {
		user_id: UserId(row.get::<i64, _>("user_id") as u32),
		account_id: AccountId(row.get::<i64, _>("account_id") as u32),
		is_staff: row.get::<i64, _>("is_staff") != 0,
		created_at: Timestamp(row.get("created_at")),
	})
}

fn map_create_err(err: sqlx::Error) -> Error {
	if let sqlx::Error::Database(ref db_err) = err {
		if matches!(db_err.kind(), ErrorKind::UniqueViolation) {
			return Error::AlreadyExists;
		}
	}
	inspect(&err);
	Error::DbError
}

pub(crate) async fn create(
	db: &SqlitePool,
	owner: UserId,
	expires_at: Option<Timestamp>,
) -> PrResult<Account> {
	let res = sqlx::query("INSERT INTO accounts (owner, expires_at) VALUES (?, ?)")
		.bind(i64::from(owner.0))
		.bind(expires_at.map(|ts| ts.0))
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	read(db, AccountId(res.last_insert_rowid() as u32)).await
}

pub(crate) async fn read(db: &SqlitePool, account_id: AccountId) -> PrResult<Account> {
	let row = sqlx::query("SELECT * FROM accounts WHERE account_id = ?")
		.bind(i64::from(account_id.0))
		.fetch_one(db)
		.await;

	map_res(row, map_account)
}

pub(crate) async fn create_user(
	db: &SqlitePool,
	user_id: UserId,
	account_id: AccountId,
	is_staff: bool,
) -> PrResult<AccountUser> {
	sqlx::query("INSERT INTO account_users (user_id, account_id, is_staff) VALUES (?, ?, ?)")
		.bind(i64::from(user_id.0))
		.bind(i64::from(account_id.0))
		.bind(i64::from(is_staff))
		.execute(db)
		.await
		.map_err(map_create_err)?;

	read_user(db, user_id).await
}

pub(crate) async fn read_user(db: &SqlitePool, user_id: UserId) -> PrResult<AccountUser> {
	let row = sqlx::query("SELECT * FROM account_users WHERE user_id = ?")
		.bind(i64::from(user_id.0))
		.fetch_one(db)
		.await;

	map_res(row, map_account_user)
}

pub(crate) async fn list_users(
	db: &SqlitePool,
	account_id: AccountId,
) -> PrResult<Vec<AccountUser>> {
	let rows = sqlx::query("SELECT * FROM account_users WHERE account_id = ? ORDER BY user_id")
		.bind(i64::from(account_id.0))
		.fetch_all(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	rows.into_iter()
		.map(|row| map_account_user(row).inspect_err(inspect).map_err(|_| Error::DbError))
		.collect()
}

pub(crate) async fn delete_user(db: &SqlitePool, user_id: UserId) -> PrResult<()> {
	sqlx::query("DELETE FROM account_users WHERE user_id = ?")
		.bind(i64::from(user_id.0))
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	Ok(())
}

// vim: ts=4
