//! Bindings for the controls that live in the page's static markup rather
//! than inside a yew component.

use crate::config::SiteConfig;
use crate::toggles::{GalleryPager, MobileNav};
use log::warn;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, NodeList};

const MOBILE_OPEN_CLASS: &str = "mobile-open";
const HIDDEN_CLASS: &str = "hidden";

/// Wires the hamburger button and closes the menu whenever a link is used.
/// Pages without the menu markup are left alone.
pub fn bind_mobile_nav(document: &Document, config: &SiteConfig) -> Result<(), JsValue> {
    let (Some(button), Some(links)) = (
        document.query_selector(config.menu_button_selector)?,
        document.query_selector(config.nav_links_selector)?,
    ) else {
        return Ok(());
    };

    let icon = button.query_selector("i")?;
    let anchors = elements(&links.query_selector_all("a")?);
    let nav = Rc::new(RefCell::new(MobileNav::default()));

    {
        let nav = nav.clone();
        let links = links.clone();
        let icon = icon.clone();
        listen(&button, move |_| {
            let mut state = nav.borrow_mut();
            state.toggle();
            report(apply_nav(&links, icon.as_ref(), *state));
        })?;
    }

    for anchor in anchors {
        let nav = nav.clone();
        let links = links.clone();
        let icon = icon.clone();
        listen(&anchor, move |_| {
            let mut state = nav.borrow_mut();
            state.link_activated();
            report(apply_nav(&links, icon.as_ref(), *state));
        })?;
    }

    Ok(())
}

fn apply_nav(links: &Element, icon: Option<&Element>, nav: MobileNav) -> Result<(), JsValue> {
    links
        .class_list()
        .toggle_with_force(MOBILE_OPEN_CLASS, nav.is_open())?;
    if let Some(icon) = icon {
        let classes = icon.class_list();
        classes.toggle_with_force("fa-bars", !nav.is_open())?;
        classes.toggle_with_force("fa-times", nav.is_open())?;
    }
    Ok(())
}

/// Hides gallery items past the first page and wires the show-more button.
pub fn bind_gallery(document: &Document, config: &SiteConfig) -> Result<(), JsValue> {
    let items = elements(&document.query_selector_all(config.gallery_item_selector)?);
    let mut pager = GalleryPager::new(config.gallery_page_size);
    apply_gallery(&items, pager)?;

    let Some(button) = document.get_element_by_id(config.gallery_button_id) else {
        return Ok(());
    };

    let target = button.clone();
    listen(&button, move |_| {
        pager.toggle();
        report(apply_gallery(&items, pager));
        target.set_text_content(Some(pager.label()));
    })
}

fn apply_gallery(items: &[Element], pager: GalleryPager) -> Result<(), JsValue> {
    for (index, item) in items.iter().enumerate() {
        item.class_list()
            .toggle_with_force(HIDDEN_CLASS, !pager.is_visible(index))?;
    }
    Ok(())
}

fn listen<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    element.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())?;
    // The page never unbinds these controls.
    callback.forget();
    Ok(())
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn report(result: Result<(), JsValue>) {
    if let Err(err) = result {
        warn!("Failed to update page controls: {:?}", err);
    }
}
