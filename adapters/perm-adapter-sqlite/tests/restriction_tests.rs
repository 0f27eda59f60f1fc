//! Restriction row storage tests

use tempfile::TempDir;

use pressroom::auth::Grantee;
use pressroom::perm_adapter::{CreateRestrictionData, Perm, PermAdapter};
use pressroom::prelude::*;
use pressroom_perm_adapter_sqlite::PermAdapterSqlite;

async fn create_test_adapter() -> (PermAdapterSqlite, TempDir) {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");
	let adapter = PermAdapterSqlite::new(temp_dir.path().join("perm.db"))
		.await
		.expect("Failed to create adapter");

	(adapter, temp_dir)
}

#[tokio::test]
async fn test_create_and_read_round_trip() {
	let (adapter, _temp) = create_test_adapter().await;
	let view = Perm::new("news.view_news");

	let restriction_id = adapter
		.create_restriction(&CreateRestrictionData {
			grantee: Grantee::User(UserId(1)),
			perm: &view,
			field: "creator",
			values: &["1", "2", "3"],
		})
		.await
		.expect("create");

	let restriction = adapter.read_restriction(restriction_id).await.expect("read");

	assert_eq!(restriction.restriction_id, restriction_id);
	assert_eq!(restriction.grantee, Grantee::User(UserId(1)));
	assert_eq!(restriction.perm, view);
	assert_eq!(restriction.field.as_ref(), "creator");
	assert_eq!(restriction.values.as_ref(), ["1".into(), "2".into(), "3".into()]);
}

#[tokio::test]
async fn test_read_missing_restriction() {
	let (adapter, _temp) = create_test_adapter().await;

	assert!(matches!(
		adapter.read_restriction(RestrictionId(4711)).await,
		Err(Error::NotFound)
	));
}

#[tokio::test]
async fn test_delete_removes_row() {
	let (adapter, _temp) = create_test_adapter().await;
	let view = Perm::new("news.view_news");

	let restriction_id = adapter
		.create_restriction(&CreateRestrictionData {
			grantee: Grantee::User(UserId(1)),
			perm: &view,
			field: "creator",
			values: &["1"],
		})
		.await
		.expect("create");

	adapter.delete_restriction(restriction_id).await.expect("delete");

	assert!(matches!(adapter.read_restriction(restriction_id).await, Err(Error::NotFound)));
	assert_eq!(
		adapter.count_restrictions(Grantee::User(UserId(1)), &view).await.expect("count"),
		0
	);
}

#[tokio::test]
async fn test_list_matches_any_grantee() {
	let (adapter, _temp) = create_test_adapter().await;
	let view = Perm::new("news.view_news");
	let alice = Grantee::User(UserId(1));
	let editors = Grantee::Group(GroupId(7));

	for (grantee, values) in [(alice, ["1"].as_slice()), (editors, ["2"].as_slice())] {
		adapter
			.create_restriction(&CreateRestrictionData {
				grantee,
				perm: &view,
				field: "creator",
				values,
			})
			.await
			.expect("create");
	}
	// A different permission must never surface
	adapter
		.create_restriction(&CreateRestrictionData {
			grantee: alice,
			perm: &Perm::new("news.change_news"),
			field: "creator",
			values: &["1"],
		})
		.await
		.expect("create");

	let for_alice = adapter.list_restrictions(&[alice], &view).await.expect("list");
	assert_eq!(for_alice.len(), 1);

	let for_both = adapter.list_restrictions(&[alice, editors], &view).await.expect("list");
	assert_eq!(for_both.len(), 2);

	let for_nobody = adapter.list_restrictions(&[], &view).await.expect("list");
	assert!(for_nobody.is_empty());
}

#[tokio::test]
async fn test_count_is_per_grantee_and_perm() {
	let (adapter, _temp) = create_test_adapter().await;
	let view = Perm::new("news.view_news");
	let alice = Grantee::User(UserId(1));

	for values in [["politics"].as_slice(), ["sports"].as_slice()] {
		adapter
			.create_restriction(&CreateRestrictionData {
				grantee: alice,
				perm: &view,
				field: "category",
				values,
			})
			.await
			.expect("create");
	}

	assert_eq!(adapter.count_restrictions(alice, &view).await.expect("count"), 2);
	assert_eq!(
		adapter
			.count_restrictions(Grantee::User(UserId(2)), &view)
			.await
			.expect("count"),
		0
	);
}

#[tokio::test]
async fn test_values_keep_surrounding_whitespace_out() {
	let (adapter, _temp) = create_test_adapter().await;
	let view = Perm::new("news.view_news");

	let restriction_id = adapter
		.create_restriction(&CreateRestrictionData {
			grantee: Grantee::User(UserId(1)),
			perm: &view,
			field: "creator",
			values: &["1", "2"],
		})
		.await
		.expect("create");

	let restriction = adapter.read_restriction(restriction_id).await.expect("read");
	assert!(restriction.values.iter().all(|value| value.trim() == value.as_ref()));
}

// vim: ts=4
