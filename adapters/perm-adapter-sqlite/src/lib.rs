//! SQLite-backed permission adapter for the Pressroom platform.
//!
//! Stores the permission directory (grants), the restriction rows, and
//! account provisioning data. Restriction values are kept as a
//! comma-delimited column and parsed into a typed list at this boundary;
//! nothing above the adapter ever sees the delimited form.

use async_trait::async_trait;
use std::path::Path;

use sqlx::{
	sqlite::{self, SqlitePool, SqliteRow},
	Row,
};

use pressroom::auth::Grantee;
use pressroom::model::{Account, AccountUser};
use pressroom::perm_adapter::{CreateRestrictionData, Perm, PermAdapter, Restriction};
use pressroom::prelude::*;

mod account;
mod grant;
mod restriction;
mod schema;

// Helper functions
//******************

pub(crate) fn inspect(err: &sqlx::Error) {
	warn!("DB: {:#?}", err);
}

pub(crate) fn parse_str_list(s: &str) -> Box<[Box<str>]> {
	s.split(',').map(|s| s.trim().to_owned().into_boxed_str()).collect::<Vec<_>>().into_boxed_slice()
}

pub(crate) fn join_str_list(values: &[&str]) -> String {
	values.join(",")
}

pub(crate) fn map_res<T, F>(row: Result<SqliteRow, sqlx::Error>, f: F) -> PrResult<T>
where
	F: FnOnce(SqliteRow) -> Result<T, sqlx::Error>,
{
	match row {
		Ok(row) => f(row).inspect_err(inspect).map_err(|_| Error::DbError),
		Err(sqlx::Error::RowNotFound) => Err(Error::NotFound),
		Err(err) => {
			inspect(&err);
			Err(Error::DbError)
		}
	}
}

/// Storage column form of a grantee: kind character plus numeric id
pub(crate) fn grantee_parts(grantee: Grantee) -> (&'static str, i64) {
	match grantee {
		Grantee::User(user_id) => ("U", i64::from(user_id.0)),
		Grantee::Group(group_id) => ("G", i64::from(group_id.0)),
	}
}

pub(crate) fn grantee_from_row(row: &SqliteRow) -> PrResult<Grantee> {
	let kind: String = row.get("grantee_kind");
	let id: i64 = row.get("grantee_id");
	match kind.as_str() {
		"U" => Ok(Grantee::User(UserId(id as u32))),
		"G" => Ok(Grantee::Group(GroupId(id as u32))),
		other => {
			warn!(kind = other, "unknown grantee kind in database");
			Err(Error::DbError)
		}
	}
}

#[derive(Debug)]
pub struct PermAdapterSqlite {
	db: SqlitePool,
}

impl PermAdapterSqlite {
	pub async fn new(path: impl AsRef<Path>) -> PrResult<Self> {
		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path.as_ref())
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(inspect)
			.map_err(|_| Error::DbError)?;

		schema::init_db(&db).await.inspect_err(inspect).map_err(|_| Error::DbError)?;

		Ok(Self { db })
	}

	/// # Account provisioning

	pub async fn create_account(
		&self,
		owner: UserId,
		expires_at: Option<Timestamp>,
	) -> PrResult<Account> {
		account::create(&self.db, owner, expires_at).await
	}

	pub async fn read_account(&self, account_id: AccountId) -> PrResult<Account> {
		account::read(&self.db, account_id).await
	}

	pub async fn create_account_user(
		&self,
		user_id: UserId,
		account_id: AccountId,
		is_staff: bool,
	) -> PrResult<AccountUser> {
		account::create_user(&self.db, user_id, account_id, is_staff).await
	}

	pub async fn read_account_user(&self, user_id: UserId) -> PrResult<AccountUser> {
		account::read_user(&self.db, user_id).await
	}

	pub async fn list_account_users(&self, account_id: AccountId) -> PrResult<Vec<AccountUser>> {
		account::list_users(&self.db, account_id).await
	}

	pub async fn delete_account_user(&self, user_id: UserId) -> PrResult<()> {
		account::delete_user(&self.db, user_id).await
	}
}

#[async_trait]
impl PermAdapter for PermAdapterSqlite {
	async fn grant(&self, grantee: Grantee, perm: &Perm) -> PrResult<()> {
		grant::grant(&self.db, grantee, perm).await
	}

	async fn revoke(&self, grantee: Grantee, perm: &Perm) -> PrResult<()> {
		grant::revoke(&self.db, grantee, perm).await
	}

	async fn has_perm(&self, grantees: &[Grantee], perm: &Perm) -> PrResult<bool> {
		grant::has_perm(&self.db, grantees, perm).await
	}

	async fn list_perms(&self, grantee: Grantee) -> PrResult<Vec<Perm>> {
		grant::list_perms(&self.db, grantee).await
	}

	async fn create_restriction(
		&self,
		data: &CreateRestrictionData<'_>,
	) -> PrResult<RestrictionId> {
		restriction::create(&self.db, data).await
	}

	async fn read_restriction(&self, restriction_id: RestrictionId) -> PrResult<Restriction> {
		restriction::read(&self.db, restriction_id).await
	}

	async fn delete_restriction(&self, restriction_id: RestrictionId) -> PrResult<()> {
		restriction::delete(&self.db, restriction_id).await
	}

	async fn list_restrictions(
		&self,
		grantees: &[Grantee],
		perm: &Perm,
	) -> PrResult<Vec<Restriction>> {
		restriction::list(&self.db, grantees, perm).await
	}

	async fn count_restrictions(&self, grantee: Grantee, perm: &Perm) -> PrResult<u32> {
		restriction::count(&self.db, grantee, perm).await
	}
}


// vim: ts=4
