//! Scenario tests for the table view engine

use chrono::{TimeZone, Utc};
use umh_core::{
    AccountField, AccountRecord, AccountStatus, ContentField, ContentRecord, Plan, PublishStatus,
    Quality,
};
use umh_table::{DeleteOutcome, SortDirection, SortSpec, TableViewEngine};

// ============================================================================
// Fixtures
// ============================================================================

const GENRES: &[&str] = &["Sci-Fi", "Action", "Drama", "Thriller", "Horror", "Adventure"];

fn movie(i: usize) -> ContentRecord {
    ContentRecord {
        id: format!("MOV-{}", 1000 + i),
        title: format!("Cinematic Masterpiece {}", i + 1),
        description: String::new(),
        director: format!("Director {}", i + 1),
        genre: GENRES[i % GENRES.len()].to_string(),
        year: 2020 + (i % 5) as i32,
        quality: if i % 3 == 0 { Quality::Hd } else { Quality::FourK },
        rating: format!("{:.1}", 3.0 + (i % 20) as f64 / 10.0),
        views: umh_core::format_grouped((i as u64 * 7919) % 50_000),
        status: PublishStatus::Published,
    }
}

fn movies(count: usize) -> Vec<ContentRecord> {
    (0..count).map(movie).collect()
}

fn user(i: usize, day: u32) -> AccountRecord {
    AccountRecord {
        id: format!("USR-{}", 5000 + i),
        name: format!("User {}", i + 1),
        email: format!("user{}@example.com", i + 1),
        plan: Plan::all()[i % 4],
        status: AccountStatus::Active,
        last_login: Utc.with_ymd_and_hms(2025, 1, day, 9, 0, 0).unwrap(),
    }
}

fn ids(rows: &[&ContentRecord]) -> Vec<String> {
    rows.iter().map(|r| r.id.clone()).collect()
}

fn accept(_: &str) -> bool {
    true
}

fn decline(_: &str) -> bool {
    false
}

// ============================================================================
// Pagination
// ============================================================================

mod pagination {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_125_records_make_seven_pages() {
        let mut engine = TableViewEngine::new(movies(125), 20);
        assert_eq!(engine.total_pages(), 7);

        assert_eq!(engine.set_page(7), 7);
        let view = engine.view();
        assert_eq!(view.rows.len(), 5);
        assert_eq!(view.rows[0].id, "MOV-1120");
        assert_eq!(view.rows[4].id, "MOV-1124");
        assert_eq!(view.range_label(), "Showing 121 to 125 of 125 results");
    }

    #[test]
    fn test_requesting_page_past_end_clamps() {
        let mut engine = TableViewEngine::new(movies(125), 20);
        assert_eq!(engine.set_page(8), 7);
        assert_eq!(engine.current_page(), 7);
        assert_eq!(engine.set_page(0), 1);
    }

    #[test]
    fn test_empty_collection_has_one_page() {
        let engine = TableViewEngine::<ContentRecord>::new(Vec::new(), 20);
        let view = engine.view();
        assert_eq!(view.total_pages, 1);
        assert_eq!(view.current_page, 1);
        assert!(view.rows.is_empty());
        assert!(!view.all_visible_selected());
        assert_eq!(view.range_label(), "Showing 0 of 0 results");
    }

    #[test]
    fn test_next_and_prev_stop_at_edges() {
        let mut engine = TableViewEngine::new(movies(45), 20);
        assert!(!engine.prev_page());
        assert!(engine.next_page());
        assert!(engine.next_page());
        assert!(!engine.next_page());
        assert_eq!(engine.current_page(), 3);
    }
}

// ============================================================================
// Search
// ============================================================================

mod search {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sci_fi_query_matches_genre_case_insensitively() {
        let mut records = movies(3);
        records[0].genre = "Sci-Fi".into();
        records[1].genre = "Drama".into();
        records[2].genre = "Horror".into();

        let mut engine = TableViewEngine::new(records, 20);
        engine.set_query("sci-fi");

        let rows = engine.sorted();
        assert_eq!(ids(&rows), vec!["MOV-1000"]);
    }

    #[test]
    fn test_query_matches_status_but_not_director() {
        let mut records = movies(4);
        records[2].status = PublishStatus::Draft;

        let mut engine = TableViewEngine::new(records, 20);
        engine.set_query("DRAFT");
        assert_eq!(ids(&engine.sorted()), vec!["MOV-1002"]);

        engine.set_query("director");
        assert!(engine.sorted().is_empty());
    }

    #[test]
    fn test_query_change_resets_page() {
        let mut engine = TableViewEngine::new(movies(125), 20);
        engine.set_page(5);
        engine.set_query("masterpiece");
        assert_eq!(engine.current_page(), 1);
    }

    #[test]
    fn test_account_search_fields() {
        let records = vec![user(0, 1), user(1, 2), user(2, 3)];
        let mut engine = TableViewEngine::new(records, 20);

        engine.set_query("user2@");
        let rows: Vec<_> = engine.sorted().iter().map(|r| r.id.clone()).collect();
        assert_eq!(rows, vec!["USR-5001"]);

        engine.set_query("premium");
        let rows: Vec<_> = engine.sorted().iter().map(|r| r.id.clone()).collect();
        assert_eq!(rows, vec!["USR-5002"]);
    }
}

// ============================================================================
// Sorting
// ============================================================================

mod sorting {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_views_descending_is_numeric() {
        let mut records = movies(2);
        records[0].views = "950".into();
        records[1].views = "1,200".into();

        let mut engine = TableViewEngine::new(records, 20);
        engine.toggle_sort(ContentField::Views);
        engine.toggle_sort(ContentField::Views);
        assert_eq!(
            engine.sort_spec(),
            Some(SortSpec::new(ContentField::Views, SortDirection::Descending))
        );
        assert_eq!(ids(&engine.sorted()), vec!["MOV-1001", "MOV-1000"]);
    }

    #[test]
    fn test_sort_keeps_current_page() {
        let mut engine = TableViewEngine::new(movies(125), 20);
        engine.set_page(4);
        engine.toggle_sort(ContentField::Title);
        assert_eq!(engine.current_page(), 4);
    }

    #[test]
    fn test_last_login_sorts_by_instant() {
        // "1/10/2025" sorts before "1/9/2025" as text; by instant it comes after
        let records = vec![user(0, 10), user(1, 9), user(2, 20)];
        let mut engine = TableViewEngine::new(records, 20);
        engine.toggle_sort(AccountField::LastLogin);

        let rows: Vec<_> = engine.sorted().iter().map(|r| r.id.clone()).collect();
        assert_eq!(rows, vec!["USR-5001", "USR-5000", "USR-5002"]);
    }

    #[test]
    fn test_rating_sort_with_non_finite_values_stays_ordered() {
        let mut records = movies(60);
        for record in records.iter_mut().step_by(3) {
            record.rating = "NaN".into();
        }
        let mut engine = TableViewEngine::new(records, 20);
        engine.toggle_sort(ContentField::Rating);

        let ratings: Vec<f64> = engine
            .sorted()
            .iter()
            .map(|r| r.rating.parse().unwrap())
            .collect();
        let finite: Vec<f64> = ratings.iter().copied().take_while(|r| r.is_finite()).collect();
        assert_eq!(finite.len(), 40);
        assert!(finite.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(ratings[40..].iter().all(|r| r.is_nan()));
    }

    #[test]
    fn test_clearing_sort_restores_insertion_order() {
        let mut engine = TableViewEngine::new(movies(5), 20);
        engine.toggle_sort(ContentField::Views);
        engine.set_sort(None);
        assert_eq!(
            ids(&engine.sorted()),
            vec!["MOV-1000", "MOV-1001", "MOV-1002", "MOV-1003", "MOV-1004"]
        );
    }
}

// ============================================================================
// Selection
// ============================================================================

mod selection {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_select_all_is_page_scoped() {
        let mut engine = TableViewEngine::new(movies(60), 20);
        engine.set_page(2);
        engine.select_all_visible();

        let selection = engine.selection();
        assert_eq!(selection.len(), 20);
        for i in 0..60 {
            let id = format!("MOV-{}", 1000 + i);
            assert_eq!(selection.contains(&id), (20..40).contains(&i), "{}", id);
        }
        assert!(engine.is_all_visible_selected());

        engine.set_page(1);
        assert!(!engine.is_all_visible_selected());
    }

    #[test]
    fn test_select_all_twice_deselects_page() {
        let mut engine = TableViewEngine::new(movies(30), 20);
        engine.toggle_select("MOV-1025");
        engine.select_all_visible();
        assert_eq!(engine.selection().len(), 21);

        engine.select_all_visible();
        assert_eq!(engine.selection().len(), 1);
        assert!(engine.selection().contains("MOV-1025"));
    }

    #[test]
    fn test_toggle_unknown_id_is_ignored() {
        let mut engine = TableViewEngine::new(movies(3), 20);
        assert!(!engine.toggle_select("MOV-9999"));
        assert!(engine.selection().is_empty());
    }

    #[test]
    fn test_reset_view_clears_everything() {
        let mut engine = TableViewEngine::new(movies(60), 20);
        engine.set_query("masterpiece");
        engine.toggle_sort(ContentField::Year);
        engine.set_page(3);
        engine.toggle_select("MOV-1000");

        engine.reset_view();
        assert_eq!(engine.query(), "");
        assert_eq!(engine.sort_spec(), None);
        assert_eq!(engine.current_page(), 1);
        assert!(engine.selection().is_empty());
    }
}

// ============================================================================
// Mutations
// ============================================================================

mod mutations {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bulk_delete_declined_changes_nothing() {
        let mut engine = TableViewEngine::new(movies(10), 20);
        for id in ["MOV-1001", "MOV-1004", "MOV-1007"] {
            engine.toggle_select(id);
        }

        let mut prompts = Vec::new();
        let outcome = engine.bulk_delete(&mut |message: &str| {
            prompts.push(message.to_string());
            false
        });

        assert_eq!(outcome, DeleteOutcome::Declined);
        assert_eq!(prompts, vec!["Are you sure you want to delete 3 items?"]);
        assert_eq!(engine.len(), 10);
        assert_eq!(engine.selection().len(), 3);
    }

    #[test]
    fn test_bulk_delete_accepted_removes_exactly_selected() {
        let mut engine = TableViewEngine::new(movies(10), 20);
        for id in ["MOV-1001", "MOV-1004", "MOV-1007"] {
            engine.toggle_select(id);
        }

        let outcome = engine.bulk_delete(&mut accept);
        assert_eq!(outcome, DeleteOutcome::Deleted(3));
        assert_eq!(engine.len(), 7);
        assert!(engine.selection().is_empty());
        for id in ["MOV-1001", "MOV-1004", "MOV-1007"] {
            assert!(engine.get(id).is_none());
        }
    }

    #[test]
    fn test_bulk_delete_with_empty_selection_does_not_prompt() {
        let mut engine = TableViewEngine::new(movies(3), 20);
        let outcome = engine.bulk_delete(&mut |_: &str| -> bool {
            panic!("no prompt expected");
        });
        assert_eq!(outcome, DeleteOutcome::NothingToDelete);
    }

    #[test]
    fn test_delete_clamps_page_down() {
        let mut engine = TableViewEngine::new(movies(41), 20);
        engine.set_page(3);
        assert_eq!(engine.view().rows.len(), 1);

        let outcome = engine.delete_record("MOV-1040", &mut accept);
        assert_eq!(outcome, DeleteOutcome::Deleted(1));
        assert_eq!(engine.current_page(), 2);
        assert_eq!(engine.total_pages(), 2);
    }

    #[test]
    fn test_delete_record_prompt_and_selection() {
        let mut engine = TableViewEngine::new(movies(5), 20);
        engine.toggle_select("MOV-1001");
        engine.toggle_select("MOV-1002");

        let mut prompt = String::new();
        let outcome = engine.delete_record("MOV-1003", &mut |message: &str| {
            prompt = message.to_string();
            true
        });
        assert_eq!(outcome, DeleteOutcome::Deleted(1));
        assert_eq!(prompt, "Delete this movie?");
        // Deleted record was not selected, selection is kept
        assert_eq!(engine.selection().len(), 2);

        engine.delete_record("MOV-1001", &mut accept);
        assert!(engine.selection().is_empty());

        assert_eq!(
            engine.delete_record("MOV-1001", &mut accept),
            DeleteOutcome::NothingToDelete
        );
        assert_eq!(
            engine.delete_record("MOV-1000", &mut decline),
            DeleteOutcome::Declined
        );
        assert_eq!(engine.len(), 3);
    }

    #[test]
    fn test_bulk_status_change_clears_selection() {
        let mut engine = TableViewEngine::new(movies(5), 20);
        engine.toggle_select("MOV-1000");
        engine.toggle_select("MOV-1003");

        let changed = engine.bulk_set_status(PublishStatus::Draft);
        assert_eq!(changed, 2);
        assert!(engine.selection().is_empty());

        let statuses: Vec<_> = engine.records().iter().map(|r| r.status).collect();
        assert_eq!(
            statuses,
            vec![
                PublishStatus::Draft,
                PublishStatus::Published,
                PublishStatus::Published,
                PublishStatus::Draft,
                PublishStatus::Published,
            ]
        );
    }

    #[test]
    fn test_status_change_under_filter_clamps_page() {
        let mut engine = TableViewEngine::new(movies(45), 20);
        engine.set_query("published");
        engine.set_page(3);

        let on_page: Vec<String> = engine.visible().iter().map(|r| r.id.clone()).collect();
        for id in &on_page {
            engine.toggle_select(id);
        }
        engine.bulk_set_status(PublishStatus::Draft);

        assert_eq!(engine.total_matches(), 40);
        assert_eq!(engine.current_page(), 2);
    }

    #[test]
    fn test_edit_record_replaces_matching_record() {
        let mut engine = TableViewEngine::new(movies(3), 20);
        let updated = engine.edit_record("MOV-1001", |existing| ContentRecord {
            title: "Renamed".into(),
            ..existing.clone()
        });
        assert!(updated);
        assert_eq!(engine.get("MOV-1001").unwrap().title, "Renamed");
        assert_eq!(engine.get("MOV-1001").unwrap().views, movie(1).views);
    }

    #[test]
    fn test_edit_missing_or_rekeyed_record_is_noop() {
        let mut engine = TableViewEngine::new(movies(3), 20);
        assert!(!engine.edit_record("MOV-9999", |existing| existing.clone()));

        let rekeyed = engine.edit_record("MOV-1000", |existing| ContentRecord {
            id: "MOV-1001".into(),
            ..existing.clone()
        });
        assert!(!rekeyed);
        assert_eq!(engine.records(), movies(3).as_slice());
    }
}
