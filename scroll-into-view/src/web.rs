use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Window};

use crate::tree::ScrollTree;
use crate::Rect;

/// A [`ScrollTree`] over the live browser DOM.
///
/// Scroll offsets are written as whole pixels, which is what `Element.scrollTop` stores on most
/// engines anyway.
#[derive(Clone, Debug)]
pub struct WebDom {
    window: Window,
}

impl WebDom {
    /// Binds to the global `window`, or `None` outside a browser main thread.
    pub fn new() -> Option<Self> {
        web_sys::window().map(Self::from_window)
    }

    pub fn from_window(window: Window) -> Self {
        Self { window }
    }

    pub fn window(&self) -> &Window {
        &self.window
    }
}

impl ScrollTree for WebDom {
    type Node = Element;

    fn parent(&self, node: &Element) -> Option<Element> {
        node.parent_element()
    }

    fn is_body(&self, node: &Element) -> bool {
        node.tag_name().eq_ignore_ascii_case("body")
    }

    fn client_height(&self, node: &Element) -> f64 {
        node.client_height() as f64
    }

    fn scroll_height(&self, node: &Element) -> f64 {
        node.scroll_height() as f64
    }

    fn window_height(&self) -> f64 {
        match self.window.inner_height().map(|v| v.as_f64()) {
            Ok(Some(h)) => h,
            _ => {
                siwarn!("window.innerHeight unavailable");
                0.0
            }
        }
    }

    fn bounding_rect(&self, node: &Element) -> Rect {
        let r = node.get_bounding_client_rect();
        Rect::new(r.top(), r.bottom())
    }

    fn scroll_top(&self, node: &Element) -> f64 {
        node.scroll_top() as f64
    }

    fn set_scroll_top(&mut self, node: &Element, scroll_top: f64) {
        node.set_scroll_top(scroll_top.round() as i32);
    }

    fn offset_top(&self, node: &Element) -> f64 {
        node.dyn_ref::<HtmlElement>()
            .map_or(0.0, |el| el.offset_top() as f64)
    }

    fn offset_height(&self, node: &Element) -> f64 {
        node.dyn_ref::<HtmlElement>()
            .map_or(0.0, |el| el.offset_height() as f64)
    }
}
