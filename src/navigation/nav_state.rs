/// Where keyboard focus is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Caret in the text field
    #[default]
    Input,
    /// Highlight on the i-th rendered suggestion
    Item(usize),
}

/// Focus plus the auto-search flag that suppresses lookups while browsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub focus: Focus,
    pub auto_search: bool,
}

/// Keys the state machine distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Down,
    Up,
    Escape,
    Other,
}

/// Facts about the surroundings that guard transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavGuards {
    pub item_count: usize,
    pub composing: bool,
}

/// Side effects the host applies after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEffect {
    /// Highlight item i
    FocusItem(usize),
    /// Show item i's label in the input without committing it
    MirrorLabel(usize),
    /// Move focus back to the text field
    FocusInput,
    /// Clear the committed keyword and the displayed text
    ClearKeyword,
    /// Copy the displayed text into the committed keyword
    CommitDisplayed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: NavigationState,
    pub effects: Vec<NavEffect>,
    /// False when the key should still reach the text field
    pub consumed: bool,
}

impl Transition {
    fn stay(state: NavigationState) -> Self {
        Self {
            state,
            effects: Vec::new(),
            consumed: false,
        }
    }

    fn to(focus: Focus, auto_search: bool, effects: Vec<NavEffect>, consumed: bool) -> Self {
        Self {
            state: NavigationState { focus, auto_search },
            effects,
            consumed,
        }
    }
}

/// Compute the next navigation state for `key`.
///
/// If the list shrank under a focused item, indices are clamped to the new length and an
/// empty list sends focus back to the input.
pub fn transition(state: NavigationState, key: NavKey, guards: NavGuards) -> Transition {
    match state.focus {
        Focus::Input => from_input(state, key, guards),
        Focus::Item(index) => from_item(index, key, guards),
    }
}

fn from_input(state: NavigationState, key: NavKey, guards: NavGuards) -> Transition {
    match key {
        NavKey::Down if guards.item_count > 0 && !guards.composing => Transition::to(
            Focus::Item(0),
            true,
            vec![NavEffect::FocusItem(0), NavEffect::MirrorLabel(0)],
            true,
        ),
        NavKey::Escape => Transition::to(Focus::Input, false, vec![NavEffect::ClearKeyword], true),
        _ => Transition::stay(state),
    }
}

fn from_item(index: usize, key: NavKey, guards: NavGuards) -> Transition {
    let count = guards.item_count;

    match key {
        NavKey::Escape => Transition::to(Focus::Input, false, vec![NavEffect::ClearKeyword], true),
        NavKey::Down | NavKey::Up if count == 0 => {
            Transition::to(Focus::Input, false, vec![NavEffect::FocusInput], true)
        }
        NavKey::Down => {
            let next = (index + 1) % count;
            focus_item(next)
        }
        NavKey::Up if index > 0 => focus_item((index - 1).min(count - 1)),
        NavKey::Up => Transition::to(Focus::Input, false, vec![NavEffect::FocusInput], true),
        NavKey::Other => Transition::to(
            Focus::Input,
            false,
            vec![NavEffect::CommitDisplayed, NavEffect::FocusInput],
            false,
        ),
    }
}

fn focus_item(index: usize) -> Transition {
    Transition::to(
        Focus::Item(index),
        true,
        vec![NavEffect::FocusItem(index), NavEffect::MirrorLabel(index)],
        true,
    )
}

#[cfg(test)]
#[path = "nav_state_tests.rs"]
mod nav_state_tests;
