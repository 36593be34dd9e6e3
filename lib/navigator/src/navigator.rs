//! The filter and focus state machine.

use crate::item::Action;
use crate::item::Item;
use crate::key::Key;
use crate::query::Query;

use logger::DefaultLogger as Logger;
use logger::LoggerApi;
use logger::debug;



// =================
// === Selection ===
// =================

/// Outcome of selecting an item. Indices refer to the item list passed to the navigator.
#[derive(Clone,Debug,Eq,PartialEq)]
pub enum Selection {
    /// Activate the link inside the item.
    OpenLink {
        /// Index of the selected item.
        item : usize,
    },
    /// Replace the input value with `text`. The results are already hidden.
    Autocomplete {
        /// Index of the selected item.
        item : usize,
        /// The new input value: trimmed text of the item.
        text : String,
    },
}



// ===================
// === KeyResponse ===
// ===================

/// Side effect the view has to perform after a key press.
#[derive(Clone,Debug,Eq,PartialEq)]
pub enum Effect {
    /// Nothing beyond refreshing the visibility.
    None,
    /// The focus moved; mark the focused item and scroll it into view.
    FocusMoved,
    /// An item was selected.
    Select(Selection),
    /// The results were dismissed; remove focus from the input.
    Blur,
}

/// Answer to a key press over the search input.
#[derive(Clone,Debug,Eq,PartialEq)]
pub struct KeyResponse {
    /// Whether the browser default action (submit, caret move, scroll) must be prevented.
    pub prevent_default : bool,
    /// What the view has to do.
    pub effect          : Effect,
}

impl KeyResponse {
    fn ignored() -> Self {
        Self {prevent_default:false, effect:Effect::None}
    }

    fn handled(effect:Effect) -> Self {
        Self {prevent_default:true, effect}
    }
}



// =================
// === Navigator ===
// =================

/// Filtered list of items with keyboard focus.
///
/// Visibility is kept as explicit flags: `matched` per item says whether the item passes the
/// current query, while `results_shown` and `empty_shown` say whether the results container and
/// the "no results" indicator are displayed. The focus is an index into the visible set and is
/// dropped on every filter pass.
#[derive(Debug)]
pub struct Navigator {
    logger        : Logger,
    items         : Vec<Item>,
    matched       : Vec<bool>,
    visible       : Vec<usize>,
    query         : Query,
    focus         : Option<usize>,
    results_shown : bool,
    empty_shown   : bool,
}

impl Navigator {
    /// Constructor. All items start matched, the container and the indicator start hidden.
    pub fn new(logger:&Logger, items:Vec<Item>) -> Self {
        let logger        = logger.sub("Navigator");
        let matched       = vec![true;items.len()];
        let visible       = (0..items.len()).collect();
        let query         = Query::default();
        let focus         = None;
        let results_shown = false;
        let empty_shown   = false;
        Self {logger,items,matched,visible,query,focus,results_shown,empty_shown}
    }

    /// All items, in document order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The query of the last filter pass.
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Whether the item passes the current query.
    pub fn is_matched(&self, item:usize) -> bool {
        self.matched.get(item).copied().unwrap_or(false)
    }

    /// Indices of matching items, in document order.
    pub fn visible(&self) -> &[usize] {
        &self.visible
    }

    /// Focus position within the visible set.
    pub fn focus(&self) -> Option<usize> {
        self.focus
    }

    /// Index of the focused item in the full item list.
    pub fn focused_item(&self) -> Option<usize> {
        self.focus.and_then(|position| self.visible.get(position).copied())
    }

    /// Whether the results container is displayed.
    pub fn results_shown(&self) -> bool {
        self.results_shown
    }

    /// Whether the "no results" indicator is displayed.
    pub fn empty_shown(&self) -> bool {
        self.empty_shown
    }

    /// Run a filter pass for the raw input value. Returns whether anything matched.
    pub fn filter(&mut self, input:&str) -> bool {
        self.query = Query::new(input);
        let query  = &self.query;
        for (matched,item) in self.matched.iter_mut().zip(&self.items) {
            *matched = query.matches(item.label());
        }
        self.visible = self.matched.iter().enumerate().filter(|(_,m)| **m).map(|(i,_)| i).collect();
        let has_matches    = !self.visible.is_empty();
        let has_query      = !self.query.is_empty();
        self.results_shown = has_matches || has_query;
        self.empty_shown   = !has_matches && has_query;
        self.focus         = None;
        debug!(self.logger,"Query {} matched {} of {} items.",self.query,self.visible.len(),
            self.items.len());
        has_matches
    }

    /// The input got focus. Runs a filter pass, so an empty input reveals the whole list.
    pub fn on_focus(&mut self, input:&str) {
        self.filter(input);
    }

    /// A key was released over the input. Deleting text refreshes the filter. Returns whether a
    /// filter pass was run.
    pub fn on_key_up(&mut self, key:&Key, input:&str) -> bool {
        let refilter = *key == Key::Backspace;
        if refilter {
            self.filter(input);
        }
        refilter
    }

    /// A key was pressed over the input. Does nothing while no item is visible.
    pub fn on_key_down(&mut self, key:&Key) -> KeyResponse {
        let count = self.visible.len();
        if count == 0 {
            return KeyResponse::ignored();
        }
        match key {
            Key::ArrowDown | Key::ArrowUp => {
                let down = *key == Key::ArrowDown;
                self.focus = Some(if !self.results_shown {
                    self.results_shown = true;
                    if down { 0 } else { count - 1 }
                } else {
                    // No focus counts as position -1 before stepping.
                    match (self.focus, down) {
                        (None, true)     => 0,
                        (None, false)    => (2 * count - 2) % count,
                        (Some(i), true)  => (i + 1) % count,
                        (Some(i), false) => (i + count - 1) % count,
                    }
                });
                debug!(self.logger,"Focus moved to {:?}.",self.focus);
                KeyResponse::handled(Effect::FocusMoved)
            }
            Key::Enter => {
                let selection = self.focused_item().and_then(|item| self.select(item));
                KeyResponse::handled(selection.map_or(Effect::None,Effect::Select))
            }
            Key::Escape => {
                self.dismiss();
                KeyResponse {prevent_default:false, effect:Effect::Blur}
            }
            _ => KeyResponse::ignored(),
        }
    }

    /// Select the item with the given index in the full item list. Returns `None` for unknown
    /// indices and items without a known action.
    pub fn select(&mut self, item:usize) -> Option<Selection> {
        let action = self.items.get(item)?.action()?;
        debug!(self.logger,"Selecting item {} with {:?}.",item,action);
        match action {
            Action::OpenLink     => Some(Selection::OpenLink {item}),
            Action::Autocomplete => {
                let text = self.items[item].text().trim().to_string();
                self.dismiss();
                Some(Selection::Autocomplete {item,text})
            }
        }
    }

    /// Hide the results container and the "no results" indicator. The focus is kept until the
    /// next filter pass.
    pub fn dismiss(&mut self) {
        self.results_shown = false;
        self.empty_shown   = false;
    }
}



// =============
// === Tests ===
// =============

#[cfg(test)]
mod tests {
    use super::*;

    fn navigator(texts:&[&str], action:Option<Action>) -> Navigator {
        let items = texts.iter().map(|text| Item::new(*text,action)).collect();
        Navigator::new(&Logger::new("Test"),items)
    }

    fn fruits() -> Navigator {
        navigator(&["Apple","Banana","Avocado"],Some(Action::Autocomplete))
    }

    fn press(navigator:&mut Navigator, key:Key, times:usize) {
        for _ in 0..times {
            navigator.on_key_down(&key);
        }
    }

    #[test]
    fn initial_state() {
        let nav = fruits();
        assert!(!nav.results_shown());
        assert!(!nav.empty_shown());
        assert_eq!(nav.focus(), None);
        assert_eq!(nav.visible(), &[0,1,2]);
    }

    #[test]
    fn case_insensitive_substring_filter() {
        let mut nav = fruits();
        assert!(nav.filter("a"));
        assert_eq!(nav.visible(), &[0,1,2]);
        assert!(nav.filter("BAN"));
        assert_eq!(nav.visible(), &[1]);
        assert!(nav.is_matched(1));
        assert!(!nav.is_matched(0));
        assert!(!nav.is_matched(17));
    }

    #[test]
    fn visibility_matches_query_for_every_item() {
        let texts = ["Apple","Banana","Avocado","Cherry","apple pie",""];
        let mut nav = navigator(&texts,None);
        for input in &["", "a", "AP", " pie ", "rr", "zzz", "banana", "e"] {
            nav.filter(input);
            let query = input.trim().to_lowercase();
            for (i,text) in texts.iter().enumerate() {
                let expected = query.is_empty() || text.to_lowercase().contains(&query);
                assert_eq!(nav.is_matched(i), expected, "item {:?} for input {:?}", text, input);
            }
        }
    }

    #[test]
    fn empty_query_shows_everything() {
        let mut nav = fruits();
        nav.filter("zzz");
        assert!(nav.filter("   "));
        assert_eq!(nav.visible().len(), 3);
        assert!(nav.results_shown());
        assert!(!nav.empty_shown());
    }

    #[test]
    fn no_matches_show_empty_indicator() {
        let mut nav = fruits();
        assert!(!nav.filter("kiwi"));
        assert!(nav.visible().is_empty());
        assert!(nav.results_shown());
        assert!(nav.empty_shown());
    }

    #[test]
    fn empty_item_list_with_empty_query_hides_everything() {
        let mut nav = navigator(&[],None);
        assert!(!nav.filter(""));
        assert!(!nav.results_shown());
        assert!(!nav.empty_shown());
    }

    #[test]
    fn filter_resets_focus() {
        let mut nav = fruits();
        nav.filter("");
        press(&mut nav,Key::ArrowDown,2);
        assert_eq!(nav.focus(), Some(1));
        nav.filter("a");
        assert_eq!(nav.focus(), None);
    }

    #[test]
    fn arrow_from_hidden_state_jumps_to_edges() {
        let mut nav = fruits();
        nav.filter("");
        nav.dismiss();
        let response = nav.on_key_down(&Key::ArrowDown);
        assert_eq!(response, KeyResponse {prevent_default:true, effect:Effect::FocusMoved});
        assert_eq!(nav.focus(), Some(0));
        assert!(nav.results_shown());

        press(&mut nav,Key::ArrowDown,1);
        assert_eq!(nav.focus(), Some(1));
        nav.dismiss();
        press(&mut nav,Key::ArrowDown,1);
        assert_eq!(nav.focus(), Some(0));
        nav.dismiss();
        nav.on_key_down(&Key::ArrowUp);
        assert_eq!(nav.focus(), Some(2));
    }

    #[test]
    fn arrow_up_without_focus_steps_back_from_before_first() {
        let mut nav = fruits();
        nav.filter("a");
        nav.on_key_down(&Key::ArrowUp);
        assert_eq!(nav.focus(), Some(1));

        let mut nav = navigator(&["Apple"],None);
        nav.filter("a");
        nav.on_key_down(&Key::ArrowUp);
        assert_eq!(nav.focus(), Some(0));

        let mut nav = navigator(&["Apple","Avocado"],None);
        nav.on_focus("");
        nav.on_key_down(&Key::ArrowUp);
        assert_eq!(nav.focus(), Some(0));
    }

    #[test]
    fn arrow_down_without_focus_goes_to_first() {
        let mut nav = fruits();
        nav.filter("a");
        nav.on_key_down(&Key::ArrowDown);
        assert_eq!(nav.focus(), Some(0));
    }

    #[test]
    fn focus_with_empty_input_shows_all_items() {
        let mut nav = fruits();
        nav.filter("kiwi");
        nav.on_focus("");
        assert!(nav.results_shown());
        assert!(!nav.empty_shown());
        assert_eq!(nav.visible(), &[0,1,2]);
    }

    #[test]
    fn navigation_wraps_around() {
        let mut nav = fruits();
        nav.on_focus("");
        press(&mut nav,Key::ArrowDown,1);
        assert_eq!(nav.focus(), Some(0));
        press(&mut nav,Key::ArrowDown,3);
        assert_eq!(nav.focus(), Some(0));
        press(&mut nav,Key::ArrowUp,1);
        assert_eq!(nav.focus(), Some(2));
    }

    #[test]
    fn focus_stays_in_range() {
        let mut nav = navigator(&["a1","a2","b1","a3","b2"],None);
        let keys = [Key::ArrowDown,Key::ArrowUp,Key::ArrowUp,Key::Escape,Key::ArrowDown];
        for input in &["", "a", "b", "b2", "x"] {
            nav.on_focus(input);
            for key in keys.iter().cycle().take(23) {
                nav.on_key_down(key);
                let count = nav.visible().len();
                assert!(nav.focus().map_or(true, |i| i < count));
            }
        }
    }

    #[test]
    fn keys_are_ignored_without_visible_items() {
        let mut nav = fruits();
        nav.filter("kiwi");
        for key in &[Key::ArrowDown,Key::ArrowUp,Key::Enter,Key::Escape] {
            assert_eq!(nav.on_key_down(key), KeyResponse::ignored());
        }
        assert_eq!(nav.focus(), None);
        assert!(nav.empty_shown());
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut nav = fruits();
        nav.on_focus("");
        assert_eq!(nav.on_key_down(&Key::Other("a".into())), KeyResponse::ignored());
    }

    #[test]
    fn enter_autocompletes_focused_item() {
        let mut nav = navigator(&["Apple"," Banana ","Avocado"],Some(Action::Autocomplete));
        nav.on_focus("");
        press(&mut nav,Key::ArrowDown,2);
        assert_eq!(nav.focus(), Some(1));
        let response = nav.on_key_down(&Key::Enter);
        let text     = "Banana".to_string();
        let expected = Effect::Select(Selection::Autocomplete {item:1,text});
        assert_eq!(response, KeyResponse {prevent_default:true, effect:expected});
        assert!(!nav.results_shown());
        assert!(!nav.empty_shown());
    }

    #[test]
    fn enter_selects_within_visible_set() {
        let mut nav = navigator(&["Apple","Banana","Avocado"],Some(Action::OpenLink));
        nav.filter("av");
        press(&mut nav,Key::ArrowDown,1);
        let response = nav.on_key_down(&Key::Enter);
        assert_eq!(response.effect, Effect::Select(Selection::OpenLink {item:2}));
        assert!(nav.results_shown());
    }

    #[test]
    fn enter_without_focus_only_prevents_default() {
        let mut nav = fruits();
        nav.on_focus("");
        assert_eq!(nav.on_key_down(&Key::Enter), KeyResponse::handled(Effect::None));
    }

    #[test]
    fn items_without_action_are_not_selectable() {
        let mut nav = navigator(&["Apple"],None);
        nav.on_focus("");
        nav.on_key_down(&Key::ArrowDown);
        assert_eq!(nav.on_key_down(&Key::Enter).effect, Effect::None);
        assert_eq!(nav.select(0), None);
        assert_eq!(nav.select(4), None);
    }

    #[test]
    fn escape_dismisses_and_blurs() {
        let mut nav = fruits();
        nav.filter("zz");
        nav.filter("a");
        let response = nav.on_key_down(&Key::Escape);
        assert_eq!(response, KeyResponse {prevent_default:false, effect:Effect::Blur});
        assert!(!nav.results_shown());
        assert!(!nav.empty_shown());
    }

    #[test]
    fn focus_with_text_filters_without_reset() {
        let mut nav = fruits();
        nav.on_focus("kiwi");
        assert!(nav.results_shown());
        assert!(nav.empty_shown());
    }

    #[test]
    fn backspace_refilters() {
        let mut nav = fruits();
        nav.filter("bana");
        assert!(!nav.on_key_up(&Key::Other("x".into()),"ban"));
        assert_eq!(nav.query().as_str(), "bana");
        assert!(nav.on_key_up(&Key::Backspace,"a"));
        assert_eq!(nav.query().as_str(), "a");
        assert_eq!(nav.visible(), &[0,1,2]);
    }

    #[test]
    fn dismiss_keeps_focus() {
        let mut nav = fruits();
        nav.on_focus("");
        nav.on_key_down(&Key::ArrowDown);
        nav.dismiss();
        assert_eq!(nav.focus(), Some(0));
        assert_eq!(nav.focused_item(), Some(0));
    }
}
