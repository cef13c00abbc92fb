//! Mouse click handling
//!
//! A click on a recent keyword opens its results right away.

use super::app_state::{App, Submission};

impl App {
    pub(super) fn click_recent_keyword(&mut self, column: u16, row: u16) {
        let Some(list) = self.layout_regions.recent_list else {
            return;
        };

        if column < list.x
            || column >= list.x.saturating_add(list.width)
            || row < list.y
            || row >= list.y.saturating_add(list.height)
        {
            return;
        }

        let index = row.saturating_sub(list.y) as usize;
        let Some(keyword) = self
            .recent_keywords
            .as_ref()
            .and_then(|keywords| keywords.get(index))
            .cloned()
        else {
            return;
        };

        log::info!("Opening recent keyword {:?}", keyword);

        // Recent keywords are already cached; opening one does not rewrite the store
        self.finish(Submission {
            keyword,
            persist: false,
        });
    }
}
