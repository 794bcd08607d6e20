//! Property tests for the catalog's store and cache behaviour.

use std::future::Future;
use std::sync::Arc;

use bitebuzz::{Catalog, CatalogConfig, CategoryFilter, SortOrder, ALL_CATEGORIES};
use bitebuzz_store::{SqliteStore, Store};
use bitebuzz_testkit::{blank, category_name, ItemParams, TestFixture};
use proptest::prelude::*;

fn block_on<F: Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(future)
}

async fn unseeded() -> Catalog<SqliteStore> {
    Catalog::open(SqliteStore::open_memory().unwrap(), CatalogConfig::unseeded())
        .await
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn add_category_is_idempotent(name in category_name()) {
        let names = block_on(async {
            let catalog = unseeded().await;
            catalog.add_category(&name).await.unwrap();
            catalog.add_category(&name).await.unwrap();
            catalog.list_categories(false).await.unwrap()
        });

        prop_assert_eq!(names, vec![name.trim().to_string()]);
    }

    #[test]
    fn blank_category_changes_nothing(ws in blank()) {
        let (before, after) = block_on(async {
            let fixture = TestFixture::sqlite().await;
            let before = fixture.catalog.list_categories(false).await.unwrap();
            fixture.catalog.add_category(&ws).await.unwrap();
            let after = fixture.catalog.list_categories(false).await.unwrap();
            (before, after)
        });

        prop_assert_eq!(before, after);
    }

    #[test]
    fn sentinel_leads_sorted_names(names in prop::collection::vec(category_name(), 0..8)) {
        let listed = block_on(async {
            let catalog = unseeded().await;
            for name in &names {
                catalog.add_category(name).await.unwrap();
            }
            catalog.list_categories(true).await.unwrap()
        });

        prop_assert_eq!(listed[0].as_str(), ALL_CATEGORIES);
        let rest = &listed[1..];
        prop_assert!(rest.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn inserted_item_is_listed_once(
        earlier in prop::collection::vec(any::<ItemParams>(), 0..4),
        params in any::<ItemParams>(),
    ) {
        let item = params.to_new_item().unwrap();
        let (previous_max, id, rows) = block_on(async {
            let fixture = TestFixture::sqlite().await;
            for p in &earlier {
                fixture.catalog.add_item(&p.to_new_item().unwrap()).await.unwrap();
            }
            let previous_max = fixture
                .raw_items(&CategoryFilter::All, SortOrder::Latest)
                .await
                .first()
                .map(|i| i.timestamp);

            let id = fixture.catalog.add_item(&item).await.unwrap();
            let filter = CategoryFilter::from_selection(Some(item.category()));
            let rows = fixture.catalog.items(filter, SortOrder::Latest).await.unwrap();
            (previous_max, id, rows)
        });

        let matching: Vec<_> = rows.iter().filter(|r| r.id == id).collect();
        prop_assert_eq!(matching.len(), 1);
        let row = matching[0];
        prop_assert_eq!(row.name.as_str(), item.name());
        prop_assert_eq!(row.description.as_str(), item.description());
        prop_assert_eq!(row.category.as_str(), item.category());
        prop_assert_eq!(row.added_by.as_str(), item.added_by());
        if let Some(previous_max) = previous_max {
            prop_assert!(row.timestamp >= previous_max);
        }
    }

    #[test]
    fn latest_reverses_oldest(items in prop::collection::vec(any::<ItemParams>(), 0..6)) {
        let (latest, oldest) = block_on(async {
            let fixture = TestFixture::sqlite().await;
            for p in &items {
                fixture.catalog.add_item(&p.to_new_item().unwrap()).await.unwrap();
            }
            let latest = fixture.catalog.items(CategoryFilter::All, SortOrder::Latest).await.unwrap();
            let oldest = fixture.catalog.items(CategoryFilter::All, SortOrder::Oldest).await.unwrap();
            (latest, oldest)
        });

        let mut reversed: Vec<_> = oldest.iter().cloned().collect();
        reversed.reverse();
        prop_assert_eq!(latest.len(), items.len());
        prop_assert_eq!(&*latest, &reversed);
    }

    #[test]
    fn file_backed_listing_survives_reopen(items in prop::collection::vec(any::<ItemParams>(), 1..4)) {
        let (before, after) = block_on(async {
            let (fixture, dir) = TestFixture::sqlite_file().await;
            for p in &items {
                fixture.catalog.add_item(&p.to_new_item().unwrap()).await.unwrap();
            }
            let before = fixture.catalog.items(CategoryFilter::All, SortOrder::Oldest).await.unwrap();
            drop(fixture);

            let reopened = TestFixture::reopen(&dir).await;
            let after = reopened.catalog.items(CategoryFilter::All, SortOrder::Oldest).await.unwrap();
            let categories = reopened.catalog.list_categories(false).await.unwrap();
            assert_eq!(categories.len(), CatalogConfig::default().seed_categories.len());
            (before, after)
        });

        prop_assert_eq!(before.len(), items.len());
        prop_assert_eq!(&*before, &*after);
    }

    #[test]
    fn cache_memoizes_until_invalidated(params in any::<ItemParams>()) {
        let (first, second, third) = block_on(async {
            let fixture = TestFixture::memory().await;
            let first = fixture.catalog.items(CategoryFilter::All, SortOrder::Oldest).await.unwrap();

            let item = params.to_new_item().unwrap();
            fixture
                .catalog
                .store_unchecked()
                .insert_item(item.name(), item.description(), item.category(), item.added_by())
                .await
                .unwrap();

            let second = fixture.catalog.items(CategoryFilter::All, SortOrder::Oldest).await.unwrap();
            fixture.catalog.invalidate_cache().unwrap();
            let third = fixture.catalog.items(CategoryFilter::All, SortOrder::Oldest).await.unwrap();
            (first, second, third)
        });

        prop_assert!(Arc::ptr_eq(&first, &second));
        prop_assert_eq!(third.len(), first.len() + 1);
    }
}

#[tokio::test]
async fn samosa_fixture_scenario() {
    let fixture = TestFixture::memory().await;
    let id = fixture.add_samosa().await;
    fixture.add("Lassi", "Drinks").await;

    let snacks = fixture
        .catalog
        .items(CategoryFilter::Only("Snacks".into()), SortOrder::Latest)
        .await
        .unwrap();
    assert_eq!(snacks.len(), 1);
    assert_eq!(snacks[0].id, id);

    let soups = fixture
        .catalog
        .items(CategoryFilter::Only("Soups".into()), SortOrder::Latest)
        .await
        .unwrap();
    assert!(soups.is_empty());
}
