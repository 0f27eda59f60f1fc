//! Restriction row storage
//!
//! Values travel as a typed list everywhere above this module; the
//! comma-delimited column form is produced on write and parsed on read.

use sqlx::{sqlite::SqliteRow, QueryBuilder, Row, SqlitePool};

use pressroom::perm_adapter::{CreateRestrictionData, Perm, Restriction};
use pressroom::auth::Grantee;
use pressroom::prelude::*;

use crate::grant::push_grantees;
use crate::{grantee_from_row, grantee_parts, inspect, join_str_list, map_res, parse_str_list};

fn map_restriction(row: &SqliteRow) -> PrResult<Restriction> {
	let vals: String = row.get("vals");
	Ok(Restriction {
		restriction_id: RestrictionId(row.get("restriction_id")),
		grantee: grantee_from_row(row)?,
		perm: Perm::new(row.get::<String, _>("perm")),
		field: row.get::<String, _>("field").into(),
		values: parse_str_list(&vals),
		created_at: Timestamp(row.get("created_at")),
	})
}

pub(crate) async fn create(
	db: &SqlitePool,
	data: &CreateRestrictionData<'_>,
) -> PrResult<RestrictionId> {
	let (kind, id) = grantee_parts(data.grantee);
	let res = sqlx::query(
		"INSERT INTO restrictions (grantee_kind, grantee_id, perm, field, vals)
			VALUES (?, ?, ?, ?, ?)",
	)
	.bind(kind)
	.bind(id)
	.bind(data.perm.as_str())
	.bind(data.field)
	.bind(join_str_list(data.values))
	.execute(db)
	.await
	.inspect_err(|err| inspect(err))
	.map_err(|_| Error::DbError)?;

	Ok(RestrictionId(res.last_insert_rowid()))
}

pub(crate) async fn read(
	db: &SqlitePool,
	restriction_id: RestrictionId,
) -> PrResult<Restriction> {
	let row = sqlx::query("SELECT * FROM restrictions WHERE restriction_id = ?")
		.bind(restriction_id.0)
		.fetch_one(db)
		.await;

	let row = map_res(row, Ok)?;
	map_restriction(&row)
}

pub(crate) async fn delete(db: &SqlitePool, restriction_id: RestrictionId) -> PrResult<()> {
	sqlx::query("DELETE FROM restrictions WHERE restriction_id = ?")
		.bind(restriction_id.0)
		.execute(db)
		.await
		.inspect_err(|err| inspect(err))
		.map_err(|_| Error::DbError)?;

	Ok(())
}

pub(crate) async fn list(
	db: &SqlitePool,
	grantees: &[Grantee],
	perm: &Perm,
) -> PrResult<Vec<Restriction>> {
	if grantees.is_empty() {
		return Ok(Vec::new());
	}

	let mut query = QueryBuilder::new("SELECT * FROM restrictions WHERE perm = ");
	query.push_bind(perm.as_str());
	query.push(" AND ");
	push_grantees(&mut query, grantees);
	query.push(" ORDER BY restriction_id");

	let rows = query
		.build()
		.fetch_all(db)
		.await
		.inspect_err(|err| inspect(err))
		.map_err(|_| Error::DbError)?;

	rows.iter().map(map_restriction).collect()
}

pub(crate) async fn count(db: &SqlitePool, grantee: Grantee, perm: &Perm) -> PrResult<u32> {
	let (kind, id) = grantee_parts(grantee);
	let count: i64 = sqlx::query_scalar(
		"SELECT COUNT(*) FROM restrictions WHERE grantee_kind = ? AND grantee_id = ? AND perm = ?",
	)
	.bind(kind)
	.bind(id)
	.bind(perm.as_str())
	.fetch_one(db)
	.await
	.inspect_err(|err| inspect(err))
	.map_err(|_| Error::DbError)?;

	Ok(count as u32)
}

// vim: ts=4
