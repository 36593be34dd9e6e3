//! Lookup of the page elements the widget binds to.

use crate::prelude::*;

use crate::config::Config;
use crate::constants::role;
use crate::error::Error;

use autosearch_navigator::Action;
use autosearch_navigator::Item;
use autosearch_system_web as web;
use web_sys::Document;
use web_sys::HtmlElement;
use web_sys::HtmlInputElement;



// ================
// === Elements ===
// ================

/// Elements of a single search widget.
#[derive(Clone,Debug)]
pub struct Elements {
    /// The form wrapping the widget. Clicks outside of it dismiss the results.
    pub form    : HtmlElement,
    /// The search input.
    pub input   : HtmlInputElement,
    /// The container of the result items.
    pub results : HtmlElement,
    /// The result items, in document order.
    pub items   : Vec<HtmlElement>,
    /// The optional "no results" block.
    pub empty   : Option<HtmlElement>,
}

impl Elements {
    /// Find the elements in the document. Fails when any of the form, the input or the results
    /// container is absent.
    pub fn find(document:&Document, config:&Config) -> Result<Self,Error> {
        let select  = |role:&str| config.role_selector(role);
        let form    = web::query_one::<HtmlElement>(document,&select(role::FORM));
        let input   = web::query_one::<HtmlInputElement>(document,&select(role::INPUT));
        let results = web::query_one::<HtmlElement>(document,&select(role::RESULTS));
        match (form,input,results) {
            (Some(form),Some(input),Some(results)) => {
                let items = web::query_all(document,&select(role::ITEM));
                let empty = web::query_one(document,&select(role::EMPTY));
                Ok(Self {form,input,results,items,empty})
            }
            (form,input,results) => {
                let found   = [form.is_some(),input.is_some(),results.is_some()];
                let roles   = [role::FORM,role::INPUT,role::RESULTS];
                let missing = roles.iter().zip(&found).filter(|(_,f)| !**f).map(|(r,_)| *r);
                Err(Error::MissingElements(missing.collect::<Vec<_>>().join(", ")))
            }
        }
    }

    /// Navigator view of the result items: their text and declared action.
    pub fn navigator_items(&self, logger:&Logger, config:&Config) -> Vec<Item> {
        self.items.iter().enumerate().map(|(index,element)| {
            let text   = element.text_content().unwrap_or_default();
            let marker = element.get_attribute(&config.action_attribute);
            let action = marker.and_then(|marker| match marker.parse::<Action>() {
                Ok(action) => Some(action),
                Err(error) => {
                    debug!(logger,"Item {} is not selectable: {}",index,error);
                    None
                }
            });
            Item::new(text,action)
        }).collect()
    }

    /// Whether the form asked to suppress its native submission.
    pub fn blocks_submission(&self, config:&Config) -> bool {
        self.form.get_attribute(&config.form_submit_attribute).as_deref() == Some("false")
    }
}
