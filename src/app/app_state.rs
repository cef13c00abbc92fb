use ratatui::layout::Rect;
use ratatui::widgets::ListState;

use crate::cache::KeywordCache;
use crate::config::Config;
use crate::input::InputState;
use crate::navigation::{NavEffect, NavigationState, resolve_submission};
use crate::notification::NotificationState;
use crate::search::SearchState;
use crate::suggestion::Suggestion;

/// Keyword chosen by the user, handed to the results navigator after the prompt closes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub keyword: String,
    /// Whether the keyword should be written to the cache (form submit vs. recent click)
    pub persist: bool,
}

/// Screen areas from the last render, for mouse hit testing
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LayoutRegions {
    pub input_field: Option<Rect>,
    pub panel: Option<Rect>,
    /// Inner area of the recent keyword list, one keyword per row
    pub recent_list: Option<Rect>,
}

pub struct App {
    pub input: InputState,
    pub nav: NavigationState,
    pub search: SearchState,
    pub cache: KeywordCache,
    /// Read once when the prompt opens
    pub recent_keywords: Option<Vec<String>>,
    pub list_state: ListState,
    pub notification: NotificationState,
    pub layout_regions: LayoutRegions,
    pub submission: Option<Submission>,
    pub should_quit: bool,
    pub(super) needs_render: bool,
}

impl App {
    pub fn new(cache: KeywordCache, config: &Config) -> Self {
        let recent_keywords = cache.recent_keywords();

        Self {
            input: InputState::new(),
            nav: NavigationState::default(),
            search: SearchState::new(&config.search),
            cache,
            recent_keywords,
            list_state: ListState::default(),
            notification: NotificationState::new(),
            layout_regions: LayoutRegions::default(),
            submission: None,
            should_quit: false,
            needs_render: true,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn should_render(&self) -> bool {
        self.needs_render
    }

    pub fn clear_dirty(&mut self) {
        self.needs_render = false;
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        self.search.suggestions()
    }

    /// Advance the debounce timer and pick up finished lookups
    pub fn tick(&mut self) {
        let searched = self.search.tick(&mut self.cache);
        let received = self.search.poll_responses();
        let expired = self.notification.clear_if_expired();
        if searched || received || expired {
            self.needs_render = true;
        }
    }

    /// Stop pending work before the prompt goes away
    pub fn shutdown(&mut self) {
        self.search.cancel();
    }

    pub(super) fn apply_nav_effects(&mut self, effects: &[NavEffect]) {
        for effect in effects {
            match *effect {
                NavEffect::FocusItem(index) => self.list_state.select(Some(index)),
                NavEffect::FocusInput => self.list_state.select(None),
                NavEffect::MirrorLabel(index) => {
                    if let Some(label) = self.search.suggestions().get(index).map(|s| s.label.clone()) {
                        self.input.show(&label);
                    }
                }
                NavEffect::ClearKeyword => {
                    self.input.clear();
                    self.list_state.select(None);
                }
                NavEffect::CommitDisplayed => self.input.commit_displayed(),
            }
        }
    }

    /// Keep the field and the search controller in step with the navigation state
    pub(super) fn sync_search(&mut self) {
        self.input.sync_display(self.nav.auto_search);
        self.search
            .observe(self.input.keyword(), self.nav.auto_search);
    }

    /// Resolve the selected keyword and close the prompt. Blank selections are ignored.
    pub fn submit(&mut self) {
        let Some(keyword) = resolve_submission(
            self.input.displayed(),
            self.input.keyword(),
            self.nav.auto_search,
        ) else {
            return;
        };

        log::info!("Submitting {:?}", keyword);
        self.finish(Submission {
            keyword,
            persist: true,
        });
    }

    pub(super) fn finish(&mut self, submission: Submission) {
        self.submission = Some(submission);
        self.shutdown();
        self.should_quit = true;
    }
}
