//! A progress bar shown while a page loads its table.
//!
//! The bar does not measure anything. It moves forward on a timer and jumps
//! to the end when the table arrives.

use axum::extract::Query;
use maud::{Markup, html};
use serde::Deserialize;

use crate::endpoints;

/// How far the bar moves on each tick, in percent.
const STEP: u8 = 10;
/// The time between ticks.
const TICK_INTERVAL_MS: u64 = 100;
const COMPLETE: u8 = 100;

const ID: &str = "loading-bar";

/// The state of the loading bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingBar {
    progress: u8,
}

impl LoadingBar {
    /// A bar at `progress` percent, capped at 100.
    pub fn new(progress: u8) -> Self {
        Self {
            progress: progress.min(COMPLETE),
        }
    }

    /// An empty bar that starts ticking once it is in the page.
    pub fn start() -> Self {
        Self::new(0)
    }

    /// A full bar.
    pub fn complete() -> Self {
        Self::new(COMPLETE)
    }

    /// The bar after one more tick.
    pub fn tick(self) -> Self {
        Self::new(self.progress.saturating_add(STEP))
    }

    /// Whether the bar is full.
    pub fn is_complete(self) -> bool {
        self.progress >= COMPLETE
    }

    /// Render the bar. An incomplete bar asks for its next tick after a short delay.
    pub fn into_html(self) -> Markup {
        self.render(false)
    }

    /// Render a full bar that replaces the bar in the page from any response.
    pub fn complete_oob() -> Markup {
        Self::complete().render(true)
    }

    fn render(self, oob: bool) -> Markup {
        let next_tick_url = format!("{}?progress={}", endpoints::LOADING_PROGRESS, self.progress);
        let poll = !self.is_complete();

        html!(
            div
                id=(ID)
                class="w-full bg-gray-200 h-1 dark:bg-gray-700"
                role="progressbar"
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=(self.progress)
                hx-get=[poll.then_some(&next_tick_url)]
                hx-trigger=[poll.then(|| format!("load delay:{TICK_INTERVAL_MS}ms"))]
                hx-swap=[poll.then_some("outerHTML")]
                hx-swap-oob=[oob.then_some("true")]
            {
                div
                    class="bg-blue-600 h-1"
                    style={"width: " (self.progress) "%; transition: width 0.1s ease-in-out;"}
                {}
            }
        )
    }
}

/// The query string of a loading bar tick.
#[derive(Debug, Deserialize)]
pub struct ProgressQuery {
    /// The progress of the bar that asked for the tick.
    #[serde(default)]
    pub progress: u8,
}

/// A route handler that returns the loading bar one tick further along.
pub async fn get_loading_progress(Query(query): Query<ProgressQuery>) -> Markup {
    LoadingBar::new(query.progress).tick().into_html()
}

#[cfg(test)]
mod tests {
    use axum::extract::Query;
    use scraper::{Html, Selector};

    use super::{LoadingBar, ProgressQuery, get_loading_progress};

    #[test]
    fn tick_advances_by_ten() {
        let progress = (0..4)
            .scan(LoadingBar::start(), |bar, _| {
                *bar = bar.tick();
                Some(bar.progress)
            })
            .collect::<Vec<_>>();

        assert_eq!(progress, [10, 20, 30, 40]);
    }

    #[test]
    fn tick_caps_at_one_hundred() {
        let mut bar = LoadingBar::new(95);

        for _ in 0..5 {
            bar = bar.tick();
        }

        assert_eq!(bar.progress, 100);
        assert!(bar.is_complete());
        assert_eq!(LoadingBar::new(250).progress, 100);
    }

    #[test]
    fn incomplete_bar_polls_for_next_tick() {
        let markup = LoadingBar::new(30).into_html().into_string();
        let html = Html::parse_fragment(&markup);

        let bar = html
            .select(&Selector::parse("#loading-bar").unwrap())
            .next()
            .unwrap();
        assert_eq!(bar.value().attr("hx-get"), Some("/loading?progress=30"));
        assert_eq!(bar.value().attr("hx-trigger"), Some("load delay:100ms"));
        assert_eq!(bar.value().attr("aria-valuenow"), Some("30"));
    }

    #[test]
    fn complete_oob_bar_replaces_bar_by_id() {
        let markup = LoadingBar::complete_oob().into_string();

        assert!(markup.contains(r#"id="loading-bar""#), "got {markup}");
        assert!(markup.contains(r#"hx-swap-oob="true""#), "got {markup}");
    }

    #[test]
    fn complete_bar_stops_polling() {
        let markup = LoadingBar::complete().into_html().into_string();

        assert!(!markup.contains("hx-get"), "got {markup}");
        assert!(markup.contains("width: 100%"), "got {markup}");
    }

    #[tokio::test]
    async fn handler_returns_next_tick() {
        let markup = get_loading_progress(Query(ProgressQuery { progress: 90 }))
            .await
            .into_string();

        assert!(markup.contains(r#"aria-valuenow="100""#), "got {markup}");
        assert!(!markup.contains("hx-get"), "got {markup}");
    }
}
