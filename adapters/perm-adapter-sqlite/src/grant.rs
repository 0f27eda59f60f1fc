//! Permission directory: grants held by users and groups
//!
//! Granting is idempotent and revoking an absent grant is a no-op; the
//! reference counting that protects shared permissions lives in the engine's
//! restriction service, not here.

use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};

use pressroom::auth::Grantee;
use pressroom::perm_adapter::Perm;
use pressroom::prelude::*;

use crate::{grantee_parts, inspect};

pub(crate) async fn grant(db: &SqlitePool, grantee: Grantee, perm: &Perm) -> PrResult<()> {
	let (kind, id) = grantee_parts(grantee);
	sqlx::query("INSERT OR IGNORE INTO grants (grantee_kind, grantee_id, perm) VALUES (?, ?, ?)")
		.bind(kind)
		.bind(id)
		.bind(perm.as_str())
		.execute(db)
		.await
		.inspect_err(|err| inspect(err))
		.map_err(|_| Error::DbError)?;

	Ok(())
}

pub(crate) async fn revoke(db: &SqlitePool, grantee: Grantee, perm: &Perm) -> PrResult<()> {
	let (kind, id) = grantee_parts(grantee);
	sqlx::query("DELETE FROM grants WHERE grantee_kind = ? AND grantee_id = ? AND perm = ?")
		.bind(kind)
		.bind(id)
		.bind(perm.as_str())
		.execute(db)
		.await
		.inspect_err(|err| inspect(err))
		.map_err(|_| Error::DbError)?;

	Ok(())
}

/// Append `(grantee_kind = ? AND grantee_id = ?) OR ...` for all grantees
pub(crate) fn push_grantees(
	query: &mut QueryBuilder<'_, Sqlite>,
	grantees: &[Grantee],
) {
	query.push("(");
	for (i, grantee) in grantees.iter().enumerate() {
		let (kind, id) = grantee_parts(*grantee);
		if i > 0 {
			query.push(" OR ");
		}
		query.push("(grantee_kind = ");
		query.push_bind(kind);
		query.push(" AND grantee_id = ");
		query.push_bind(id);
		query.push(")");
	}
	query.push(")");
}

pub(crate) async fn has_perm(
	db: &SqlitePool,
	grantees: &[Grantee],
	perm: &Perm,
) -> PrResult<bool> {
	if grantees.is_empty() {
		return Ok(false);
	}

	let mut query = QueryBuilder::new("SELECT COUNT(*) FROM grants WHERE perm = ");
	query.push_bind(perm.as_str());
	query.push(" AND ");
	push_grantees(&mut query, grantees);

	let count: i64 = query
		.build_query_scalar()
		.fetch_one(db)
		.await
		.inspect_err(|err| inspect(err))
		.map_err(|_| Error::DbError)?;

	Ok(count > 0)
}

pub(crate) async fn list_perms(db: &SqlitePool, grantee: Grantee) -> PrResult<Vec<Perm>> {
	let (kind, id) = grantee_parts(grantee);
	let rows = sqlx::query(
		"SELECT perm FROM grants WHERE grantee_kind = ? AND grantee_id = ? ORDER BY perm",
	)
	.bind(kind)
	.bind(id)
	.fetch_all(db)
	.await
	.inspect_err(|err| inspect(err))
	.map_err(|_| Error::DbError)?;

	Ok(rows.iter().map(|row| Perm::new(row.get::<String, _>("perm"))).collect())
}

// vim: ts=4
