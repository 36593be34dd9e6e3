//! The search widget: navigator state bound to the page elements.

use crate::prelude::*;

use crate::config::Config;
use crate::constants;
use crate::elements::Elements;
use crate::error::Error;

use autosearch_navigator::Bounds;
use autosearch_navigator::Effect;
use autosearch_navigator::Key;
use autosearch_navigator::Navigator;
use autosearch_navigator::Selection;
use autosearch_navigator::Shortcut;
use autosearch_navigator::scroll_delta;
use autosearch_system_web as web;
use web::event;
use web::event::listener::Slot;
use web_sys::Document;
use web_sys::Element;
use web_sys::EventTarget;
use web_sys::HtmlElement;
use web_sys::KeyboardEvent;
use web_sys::MouseEvent;
use web_sys::Node;



// =============
// === Model ===
// =============

/// State shared by all event handlers of a widget.
#[derive(Debug)]
pub struct Model {
    logger    : Logger,
    config    : Config,
    shortcut  : Shortcut,
    elements  : Elements,
    navigator : RefCell<Navigator>,
}

impl Model {
    fn new(logger:&Logger, config:Config, elements:Elements) -> Self {
        let logger    = logger.clone();
        let items     = elements.navigator_items(&logger,&config);
        let navigator = RefCell::new(Navigator::new(&logger,items));
        let shortcut  = config.shortcut();
        Self {logger,config,shortcut,elements,navigator}
    }

    fn input_value(&self) -> String {
        self.elements.input.value()
    }

    /// Write the visibility flags of the navigator to the page.
    fn refresh(&self) {
        let navigator = self.navigator.borrow();
        for (index,item) in self.elements.items.iter().enumerate() {
            web::set_displayed(item,navigator.is_matched(index));
        }
        web::set_displayed(&self.elements.results,navigator.results_shown());
        if let Some(empty) = &self.elements.empty {
            web::set_displayed(empty,navigator.empty_shown());
        }
    }

    /// Mark the focused item and bring it into view.
    fn sync_focus(&self) {
        let focused = self.navigator.borrow().focused_item();
        let class   = &self.config.focused_class;
        for (index,item) in self.elements.items.iter().enumerate() {
            web::set_class(item,class,focused == Some(index));
        }
        if let Some(item) = focused.and_then(|index| self.elements.items.get(index)) {
            self.scroll_into_view(item);
        }
    }

    fn scroll_into_view(&self, item:&HtmlElement) {
        let results   = &self.elements.results;
        let font_size = web::document().ok().and_then(|document| web::root_font_size(&document));
        let font_size = font_size.unwrap_or(constants::FALLBACK_ROOT_FONT_SIZE_PX);
        let margin    = self.config.scroll_margin_rem * font_size;
        let delta     = scroll_delta(bounds(results),bounds(item),margin);
        if delta != 0.0 {
            results.set_scroll_top(results.scroll_top() + delta.round() as i32);
        }
    }

    fn apply(&self, selection:Selection) {
        match selection {
            Selection::OpenLink {item} => {
                let element = &self.elements.items[item];
                match web::query_one_in::<HtmlElement>(element,"a") {
                    Some(link) => link.click(),
                    None       => debug!(self.logger,"Item {} has no link to open.",item),
                }
            }
            Selection::Autocomplete {text,..} => {
                self.elements.input.set_value(&text);
                self.refresh();
            }
        }
    }

    fn hide_results(&self) {
        self.navigator.borrow_mut().dismiss();
        web::set_displayed(&self.elements.results,false);
        if let Some(empty) = &self.elements.empty {
            web::set_displayed(empty,false);
        }
    }


    // === Handlers ===

    fn filter(&self) {
        let value = self.input_value();
        self.navigator.borrow_mut().filter(&value);
        self.refresh();
        self.sync_focus();
    }

    fn on_focus(&self) {
        let value = self.input_value();
        self.navigator.borrow_mut().on_focus(&value);
        self.refresh();
        self.sync_focus();
    }

    fn on_key_up(&self, event:&KeyboardEvent) {
        let key      = Key::from_dom(&event.key());
        let value    = self.input_value();
        let filtered = self.navigator.borrow_mut().on_key_up(&key,&value);
        if filtered {
            self.refresh();
            self.sync_focus();
        }
    }

    fn on_key_down(&self, event:&KeyboardEvent) {
        let key      = Key::from_dom(&event.key());
        let response = self.navigator.borrow_mut().on_key_down(&key);
        if response.prevent_default {
            event.prevent_default();
        }
        match response.effect {
            Effect::None              => {}
            Effect::Select(selection) => self.apply(selection),
            Effect::FocusMoved        => {
                self.refresh();
                self.sync_focus();
            }
            Effect::Blur => {
                self.refresh();
                if let Err(error) = self.elements.input.blur() {
                    warning!(self.logger,"Cannot blur the input: {}",web::js_to_string(&error));
                }
            }
        }
    }

    fn on_item_click(&self, index:usize, event:&MouseEvent) {
        let item = &self.elements.items[index];
        if is_inside_link(item,event) {
            return;
        }
        let selection = self.navigator.borrow_mut().select(index);
        if let Some(selection) = selection {
            self.apply(selection);
        }
    }

    fn on_document_click(&self, event:&MouseEvent) {
        let target = event.target().and_then(|target| target.dyn_into::<Node>().ok());
        if !self.elements.form.contains(target.as_ref()) {
            self.hide_results();
        }
    }

    fn on_document_key_down(&self, event:&KeyboardEvent) {
        if self.shortcut.matches(&event.key(),event.ctrl_key(),event.meta_key()) {
            event.prevent_default();
            if let Err(error) = self.elements.input.focus() {
                warning!(self.logger,"Cannot focus the input: {}",web::js_to_string(&error));
            }
        }
    }
}

fn bounds(element:&Element) -> Bounds {
    let rect = web::bounding_rect(element);
    Bounds::new(rect.top(),rect.bottom())
}

/// Whether the click landed on a link placed inside the item, which navigates on its own.
fn is_inside_link(item:&HtmlElement, event:&MouseEvent) -> bool {
    let target = event.target().and_then(|target| target.dyn_into::<Element>().ok());
    let link   = target.and_then(|target| target.closest("a").ok().flatten());
    link.map_or(false, |link| item.contains(Some(link.unchecked_ref::<Node>())))
}



// =================
// === Listeners ===
// =================

/// DOM listeners of a widget. They are detached when dropped.
#[derive(Debug)]
#[allow(dead_code)]
struct Listeners {
    input         : Slot<event::Input>,
    focus         : Slot<event::Focus>,
    key_up        : Slot<event::KeyUp>,
    key_down      : Slot<event::KeyDown>,
    outside_click : Slot<event::Click>,
    shortcut      : Slot<event::KeyDown>,
    item_clicks   : Vec<Slot<event::Click>>,
    submit        : Option<Slot<event::Submit>>,
}

impl Listeners {
    fn new(model:&Rc<Model>, document:&Document) -> Self {
        let logger                = &model.logger;
        let target   : &EventTarget = model.elements.input.as_ref();
        let document : &EventTarget = document.as_ref();

        let m     = Rc::clone(model);
        let input = Slot::<event::Input>::with_callback(target,logger,
            move |_:web_sys::Event| m.filter());
        let m     = Rc::clone(model);
        let focus = Slot::<event::Focus>::with_callback(target,logger,
            move |_:web_sys::FocusEvent| m.on_focus());
        let m      = Rc::clone(model);
        let key_up = Slot::<event::KeyUp>::with_callback(target,logger,
            move |e:KeyboardEvent| m.on_key_up(&e));
        let m        = Rc::clone(model);
        let key_down = Slot::<event::KeyDown>::with_callback(target,logger,
            move |e:KeyboardEvent| m.on_key_down(&e));
        let m             = Rc::clone(model);
        let outside_click = Slot::<event::Click>::with_callback(document,logger,
            move |e:MouseEvent| m.on_document_click(&e));
        let m        = Rc::clone(model);
        let shortcut = Slot::<event::KeyDown>::with_callback(document,logger,
            move |e:KeyboardEvent| m.on_document_key_down(&e));

        let item_clicks = model.elements.items.iter().enumerate().map(|(index,item)| {
            let m                   = Rc::clone(model);
            let target:&EventTarget = item.as_ref();
            Slot::<event::Click>::with_callback(target,logger,
                move |e:MouseEvent| m.on_item_click(index,&e))
        }).collect();

        let submit = model.elements.blocks_submission(&model.config).then(|| {
            let form:&EventTarget = model.elements.form.as_ref();
            Slot::<event::Submit>::with_callback(form,logger,|e:web_sys::Event| {
                e.prevent_default();
                e.stop_propagation();
            })
        });

        Self {input,focus,key_up,key_down,outside_click,shortcut,item_clicks,submit}
    }
}



// ==================
// === AutoSearch ===
// ==================

/// A search widget bound to the page. Dropping it detaches all its listeners; to keep it
/// alive for the lifetime of the page, leak it with `mem::forget`.
#[derive(Debug)]
pub struct AutoSearch {
    model     : Rc<Model>,
    listeners : Listeners,
}

impl AutoSearch {
    /// Find the widget elements in the document and bind to them. Nothing is attached when any
    /// required element is missing.
    pub fn new(logger:&Logger, document:&Document, config:Config) -> Result<Self,Error> {
        let logger    = logger.sub("AutoSearch");
        let elements  = Elements::find(document,&config)?;
        let model     = Rc::new(Model::new(&logger,config,elements));
        model.hide_results();
        let listeners = logger.group("Attaching listeners.", || Listeners::new(&model,document));
        info!(logger,"Bound to {} result items.",model.elements.items.len());
        Ok(Self {model,listeners})
    }

    /// Focus position within the visible items.
    pub fn focus(&self) -> Option<usize> {
        self.model.navigator.borrow().focus()
    }

    /// Number of items passing the current query.
    pub fn visible_count(&self) -> usize {
        self.model.navigator.borrow().visible().len()
    }

    /// Whether the results container is displayed.
    pub fn results_shown(&self) -> bool {
        self.model.navigator.borrow().results_shown()
    }

    /// Whether the native form submission is being suppressed.
    pub fn blocks_submission(&self) -> bool {
        self.listeners.submit.is_some()
    }
}
