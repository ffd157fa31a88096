use std::sync::Once;

use console_core::{
    update, AppState, CellView, CrawlSummary, Effect, Msg, Panel, RegionContent, RegionId,
    RequestFailed, SearchHit, SearchOutcome, ServiceHealth, TabLink, CRAWL_FAILED, NO_RESULTS,
    RESETTING, RESET_DONE, RESET_FAILED, SEARCHING, SEARCH_FAILED,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(console_logging::initialize_for_tests);
}

fn bootstrapped() -> AppState {
    let (state, _) = update(AppState::new(), Msg::Bootstrap);
    state
}

fn submit_search(state: AppState, term: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::SearchTermChanged(term.to_string()));
    update(state, Msg::SearchSubmitted)
}

fn submit_crawl(state: AppState, url: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::IndexUrlChanged(url.to_string()));
    update(state, Msg::CrawlSubmitted)
}

fn hit(url: &str, title: &str, count: u64) -> SearchHit {
    SearchHit {
        url: url.to_string(),
        title: title.to_string(),
        match_count: count,
    }
}

fn search_done(request_id: u64, hits: Option<Vec<SearchHit>>) -> Msg {
    Msg::SearchCompleted {
        request_id,
        result: Ok(SearchOutcome {
            hits,
            duration_seconds: None,
        }),
    }
}

fn request_id_of(effect: &Effect) -> u64 {
    match effect {
        Effect::Search { request_id, .. }
        | Effect::Crawl { request_id, .. }
        | Effect::ResetIndex { request_id } => *request_id,
        other => panic!("effect carries no request id: {other:?}"),
    }
}

#[test]
fn bootstrap_selects_search_and_probes_health() {
    init_logging();
    let (mut state, effects) = update(AppState::new(), Msg::Bootstrap);
    let view = state.view();

    assert_eq!(view.active_panel, Some(Panel::Search));
    assert_eq!(view.visible_panel_count(), 1);
    assert_eq!(view.active_tab_count(), 1);
    assert!(view.tabs.iter().any(|t| t.link == TabLink::SearchTab && t.active));
    assert_eq!(view.health, ServiceHealth::Checking);
    assert_eq!(effects, vec![Effect::CheckHealth]);
    assert!(state.consume_dirty());
}

#[test]
fn tab_activation_keeps_exactly_one_panel_and_marker() {
    init_logging();
    let state = bootstrapped();
    let (state, effects) = update(
        state,
        Msg::TabActivated {
            panel: Panel::CrawlIndex,
            origin: Some(TabLink::CrawlTab),
        },
    );
    let view = state.view();

    assert!(effects.is_empty());
    assert_eq!(view.active_panel, Some(Panel::CrawlIndex));
    assert_eq!(view.visible_panel_count(), 1);
    assert_eq!(view.active_tab_count(), 1);
    assert!(state.tabs().is_link_active(TabLink::CrawlTab));
}

#[test]
fn bootstrap_after_tab_change_restores_default() {
    init_logging();
    let state = bootstrapped();
    let (state, _) = update(
        state,
        Msg::TabActivated {
            panel: Panel::CrawlIndex,
            origin: Some(TabLink::CrawlTab),
        },
    );
    let (state, _) = update(state, Msg::Bootstrap);

    assert_eq!(state.tabs().active_panel(), Some(Panel::Search));
    assert_eq!(state.tabs().active_link(), Some(TabLink::SearchTab));
}

#[test]
fn search_renders_placeholder_then_table() {
    init_logging();
    let (state, effects) = submit_search(bootstrapped(), "rust");

    assert_eq!(
        effects,
        vec![Effect::Search {
            request_id: 1,
            term: "rust".to_string(),
        }]
    );
    assert_eq!(state.view().search_results, RegionContent::text(SEARCHING));

    let hits = vec![
        hit("https://a.example/", "Alpha", 7),
        hit("https://b.example/", "Beta", 3),
        hit("https://c.example/", "Gamma", 1),
    ];
    let (state, effects) = update(state, search_done(1, Some(hits.clone())));
    assert!(effects.is_empty());

    let view = state.view();
    let table = view.search_results.as_table().expect("result table");
    assert_eq!(table.headers, vec!["Url", "Matches"]);
    assert_eq!(table.rows.len(), hits.len());
    for (row, hit) in table.rows.iter().zip(&hits) {
        assert_eq!(
            row[0],
            CellView::Link {
                text: hit.title.clone(),
                href: hit.url.clone(),
            }
        );
        assert_eq!(row[1], CellView::Text(hit.match_count.to_string()));
    }
}

#[test]
fn empty_term_is_sent_as_is() {
    init_logging();
    let (_, effects) = update(bootstrapped(), Msg::SearchSubmitted);
    assert_eq!(
        effects,
        vec![Effect::Search {
            request_id: 1,
            term: String::new(),
        }]
    );
}

#[test]
fn absent_or_empty_results_render_no_results() {
    init_logging();
    let (state, _) = submit_search(bootstrapped(), "nothing");
    let (state, _) = update(state, search_done(1, None));
    assert_eq!(state.view().search_results, RegionContent::text(NO_RESULTS));

    let (state, _) = submit_search(state, "nothing");
    let (state, _) = update(state, search_done(2, Some(Vec::new())));
    assert_eq!(state.view().search_results, RegionContent::text(NO_RESULTS));
}

#[test]
fn search_failure_renders_fixed_message() {
    init_logging();
    let (state, _) = submit_search(bootstrapped(), "boom");
    let (state, _) = update(
        state,
        Msg::SearchCompleted {
            request_id: 1,
            result: Err(RequestFailed),
        },
    );
    assert_eq!(state.view().search_results, RegionContent::text(SEARCH_FAILED));
}

#[test]
fn out_of_order_search_keeps_latest_response() {
    init_logging();
    let (state, first) = submit_search(bootstrapped(), "first");
    let (state, second) = submit_search(state, "second");
    let first_id = request_id_of(&first[0]);
    let second_id = request_id_of(&second[0]);
    assert!(second_id > first_id);

    let (state, _) = update(
        state,
        search_done(second_id, Some(vec![hit("https://new.example/", "New", 2)])),
    );
    let (mut state, _) = update(
        state,
        search_done(first_id, Some(vec![hit("https://old.example/", "Old", 9)])),
    );

    let view = state.view();
    let table = view.search_results.as_table().expect("result table");
    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.rows[0][0].label(), "New");
    assert!(state.consume_dirty());
}

#[test]
fn stale_failure_does_not_clobber_pending_request() {
    init_logging();
    let (state, _) = submit_search(bootstrapped(), "first");
    let (state, _) = submit_search(state, "second");
    let (mut state, _) = update(
        state,
        Msg::SearchCompleted {
            request_id: 1,
            result: Err(RequestFailed),
        },
    );

    assert_eq!(state.view().search_results, RegionContent::text(SEARCHING));
    state.consume_dirty();

    let (mut state, _) = update(
        state,
        Msg::SearchCompleted {
            request_id: 1,
            result: Err(RequestFailed),
        },
    );
    assert!(!state.consume_dirty());
}

#[test]
fn crawl_renders_summary_without_errors() {
    init_logging();
    let (state, effects) = submit_crawl(bootstrapped(), "https://example.com");
    assert_eq!(
        effects,
        vec![Effect::Crawl {
            request_id: 1,
            url: "https://example.com".to_string(),
        }]
    );
    let view = state.view();
    assert_eq!(
        view.index_results,
        RegionContent::text("Indexing https://example.com...")
    );
    assert!(view.index_errors.is_empty());

    let (state, _) = update(
        state,
        Msg::CrawlCompleted {
            request_id: 1,
            result: Ok(CrawlSummary {
                pages_crawled: 12,
                words_indexed: 340,
                duration_seconds: 4.2,
                crawl_errors: None,
            }),
        },
    );
    let view = state.view();
    let table = view.index_results.as_table().expect("summary table");
    assert_eq!(table.headers, vec!["Pages", "Words Indexed", "Duration (s)"]);
    let row: Vec<&str> = table.rows[0].iter().map(CellView::label).collect();
    assert_eq!(row, vec!["12", "340", "4.2"]);
    assert!(view.index_errors.is_empty());
}

#[test]
fn crawl_errors_render_in_order_and_clear_on_resubmit() {
    init_logging();
    let (state, _) = submit_crawl(bootstrapped(), "https://example.com");
    let (state, _) = update(
        state,
        Msg::CrawlCompleted {
            request_id: 1,
            result: Ok(CrawlSummary {
                pages_crawled: 12,
                words_indexed: 340,
                duration_seconds: 4.2,
                crawl_errors: Some(vec!["timeout on /a".into(), "404 on /b".into()]),
            }),
        },
    );
    let view = state.view();
    let errors = view.region(RegionId::IndexErrors).as_table().expect("errors");
    assert_eq!(errors.headers, vec!["Errors"]);
    let listed: Vec<&str> = errors.rows.iter().map(|row| row[0].label()).collect();
    assert_eq!(listed, vec!["timeout on /a", "404 on /b"]);
    assert!(view.index_results.as_table().is_some());

    let (state, _) = submit_crawl(state, "https://other.example");
    assert!(state.view().index_errors.is_empty());
}

#[test]
fn crawl_failure_renders_scheme_hint() {
    init_logging();
    let (state, _) = submit_crawl(bootstrapped(), "example.com");
    let (state, _) = update(
        state,
        Msg::CrawlCompleted {
            request_id: 1,
            result: Err(RequestFailed),
        },
    );
    let view = state.view();
    assert_eq!(view.index_results, RegionContent::text(CRAWL_FAILED));
    assert!(view.index_errors.is_empty());
}

#[test]
fn pending_crawl_message_keeps_submitted_url() {
    init_logging();
    let (state, _) = submit_crawl(bootstrapped(), "https://first.example");
    let (state, _) = update(state, Msg::IndexUrlChanged("https://edited.example".into()));
    assert_eq!(
        state.view().index_results,
        RegionContent::text("Indexing https://first.example...")
    );
}

#[test]
fn late_crawl_completion_keeps_newer_summary_and_errors() {
    init_logging();
    let (state, first) = submit_crawl(bootstrapped(), "https://a.example");
    let (state, second) = submit_crawl(state, "https://b.example");
    let first_id = request_id_of(&first[0]);
    let second_id = request_id_of(&second[0]);

    let (mut state, _) = update(
        state,
        Msg::CrawlCompleted {
            request_id: second_id,
            result: Ok(CrawlSummary {
                pages_crawled: 3,
                words_indexed: 70,
                duration_seconds: 0.5,
                crawl_errors: None,
            }),
        },
    );
    assert!(state.consume_dirty());

    let (mut state, _) = update(
        state,
        Msg::CrawlCompleted {
            request_id: first_id,
            result: Ok(CrawlSummary {
                pages_crawled: 99,
                words_indexed: 9999,
                duration_seconds: 8.0,
                crawl_errors: Some(vec!["old failure".into()]),
            }),
        },
    );
    assert!(!state.consume_dirty());

    let view = state.view();
    let table = view.index_results.as_table().expect("summary table");
    let row: Vec<&str> = table.rows[0].iter().map(CellView::label).collect();
    assert_eq!(row, vec!["3", "70", "0.5"]);
    assert!(view.index_errors.is_empty());
}

#[test]
fn late_crawl_failure_does_not_replace_pending_message() {
    init_logging();
    let (state, first) = submit_crawl(bootstrapped(), "https://a.example");
    let (state, _) = submit_crawl(state, "https://b.example");
    let (state, _) = update(
        state,
        Msg::CrawlCompleted {
            request_id: request_id_of(&first[0]),
            result: Err(RequestFailed),
        },
    );
    assert_eq!(
        state.view().index_results,
        RegionContent::text("Indexing https://b.example...")
    );
}

#[test]
fn late_reset_failure_keeps_newer_success() {
    init_logging();
    let (state, first) = update(bootstrapped(), Msg::ResetClicked);
    let (state, second) = update(state, Msg::ResetClicked);

    let (state, _) = update(
        state,
        Msg::ResetCompleted {
            request_id: request_id_of(&second[0]),
            result: Ok(()),
        },
    );
    let (state, _) = update(
        state,
        Msg::ResetCompleted {
            request_id: request_id_of(&first[0]),
            result: Err(RequestFailed),
        },
    );
    assert_eq!(state.view().reset_results, RegionContent::text(RESET_DONE));
}

#[test]
fn reset_success_and_failure_messages() {
    init_logging();
    let (state, effects) = update(bootstrapped(), Msg::ResetClicked);
    assert_eq!(effects, vec![Effect::ResetIndex { request_id: 1 }]);
    assert_eq!(state.view().reset_results, RegionContent::text(RESETTING));

    let (state, _) = update(
        state,
        Msg::ResetCompleted {
            request_id: 1,
            result: Ok(()),
        },
    );
    assert_eq!(state.view().reset_results, RegionContent::text(RESET_DONE));

    let (state, _) = update(state, Msg::ResetClicked);
    let (state, _) = update(
        state,
        Msg::ResetCompleted {
            request_id: 2,
            result: Err(RequestFailed),
        },
    );
    assert_eq!(state.view().reset_results, RegionContent::text(RESET_FAILED));
}

#[test]
fn workflows_do_not_touch_each_other_or_tabs() {
    init_logging();
    let (state, _) = submit_search(bootstrapped(), "rust");
    let (state, _) = update(
        state,
        Msg::TabActivated {
            panel: Panel::CrawlIndex,
            origin: Some(TabLink::CrawlTab),
        },
    );
    let (state, _) = update(state, Msg::ResetClicked);
    let (state, _) = update(
        state,
        Msg::ResetCompleted {
            request_id: 2,
            result: Ok(()),
        },
    );

    let view = state.view();
    assert_eq!(view.active_panel, Some(Panel::CrawlIndex));
    assert_eq!(view.search_results, RegionContent::text(SEARCHING));
    assert!(view.index_results.is_empty());
    assert_eq!(view.reset_results, RegionContent::text(RESET_DONE));
}

#[test]
fn open_result_emits_link_only_for_existing_rows() {
    init_logging();
    let (state, effects) = update(bootstrapped(), Msg::ResultOpened { row: 0 });
    assert!(effects.is_empty());

    let (state, _) = submit_search(state, "rust");
    let (state, _) = update(
        state,
        search_done(1, Some(vec![hit("https://a.example/", "Alpha", 1)])),
    );
    let (state, effects) = update(state, Msg::ResultOpened { row: 0 });
    assert_eq!(
        effects,
        vec![Effect::OpenLink {
            url: "https://a.example/".to_string(),
        }]
    );
    let (_, effects) = update(state, Msg::ResultOpened { row: 1 });
    assert!(effects.is_empty());
}

#[test]
fn search_duration_reaches_status_line() {
    init_logging();
    let (state, _) = submit_search(bootstrapped(), "rust");
    let (state, _) = update(
        state,
        Msg::SearchCompleted {
            request_id: 1,
            result: Ok(SearchOutcome {
                hits: None,
                duration_seconds: Some(0.25),
            }),
        },
    );
    let (state, _) = update(state, Msg::HealthChecked { online: true });
    assert_eq!(
        state.view().status_line(),
        "Service: online | Last search took 0.250s"
    );
}
