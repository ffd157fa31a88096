use console_core::markup::{to_html, to_text};
use console_core::{update, AppState, CrawlSummary, Msg, SearchHit, SearchOutcome};
use pretty_assertions::assert_eq;

fn searched(hits: Option<Vec<SearchHit>>) -> AppState {
    let (state, _) = update(AppState::new(), Msg::Bootstrap);
    let (state, _) = update(state, Msg::SearchSubmitted);
    let (state, _) = update(
        state,
        Msg::SearchCompleted {
            request_id: 1,
            result: Ok(SearchOutcome {
                hits,
                duration_seconds: Some(0.01),
            }),
        },
    );
    state
}

#[test]
fn search_table_markup() {
    let state = searched(Some(vec![SearchHit {
        url: "https://golang.org/doc".to_string(),
        title: "Docs & <More>".to_string(),
        match_count: 4,
    }]));

    assert_eq!(
        to_html(&state.view().search_results),
        "<table border='1'><tr><th>Url</th><th>Matches</th></tr>\
         <tr><td><a href=\"https://golang.org/doc\" target=\"_blank\">Docs &amp; &lt;More&gt;</a></td><td>4</td></tr>\
         </table>"
    );
}

#[test]
fn no_results_markup_is_plain_text() {
    let state = searched(None);
    assert_eq!(to_html(&state.view().search_results), "No results found");
}

#[test]
fn crawl_markup_has_summary_and_error_tables() {
    let (state, _) = update(AppState::new(), Msg::IndexUrlChanged("https://x.example".into()));
    let (state, _) = update(state, Msg::CrawlSubmitted);
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

    assert_eq!(
        to_html(&view.index_results),
        "<table border='1'><tr><th>Pages</th><th>Words Indexed</th><th>Duration (s)</th></tr>\
         <tr><td>12</td><td>340</td><td>4.2</td></tr></table>"
    );
    assert_eq!(
        to_text(&view.index_results),
        "Pages | Words Indexed | Duration (s)\n12 | 340 | 4.2"
    );
    assert_eq!(
        to_html(&view.index_errors),
        "<table border='1'><tr><th>Errors</th></tr>\
         <tr><td>timeout on /a</td></tr><tr><td>404 on /b</td></tr></table>"
    );
}
