//! "Scroll to top" button behavior.
//!
//! A two-state machine on a single button element: hidden until the
//! body scrolls past a fixed threshold, shown after it, and a click
//! that sends the window back to the origin. The machine itself is
//! pure; [`attach_scroll_top`] is the DOM glue that feeds it scroll
//! offsets and renders its state as marker-class membership.

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, UnwrapThrowExt};
use web_sys::HtmlElement;

use crate::global::{document, window};

/// Body scroll offset beyond which the button becomes visible.
pub const SCROLL_SHOW_THRESHOLD: i32 = 300;

/// Marker class carried while the button is hidden.
pub const CLASS_HIDDEN: &str = "hide";

/// Marker class carried while the button is shown.
pub const CLASS_SHOWN: &str = "show";

/// Visibility of the scroll-top button, encoded in the DOM as marker
/// class membership.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Shown,
}

impl Visibility {
    /// The state the button belongs in at the given body scroll offset.
    pub fn for_offset(offset: i32) -> Self {
        if offset > SCROLL_SHOW_THRESHOLD {
            Self::Shown
        } else {
            Self::Hidden
        }
    }

    /// Marker class of this state.
    pub fn marker(self) -> &'static str {
        match self {
            Self::Hidden => CLASS_HIDDEN,
            Self::Shown => CLASS_SHOWN,
        }
    }

    /// Marker class of the opposite state, removed on entry.
    fn cleared(self) -> &'static str {
        match self {
            Self::Hidden => CLASS_SHOWN,
            Self::Shown => CLASS_HIDDEN,
        }
    }
}

/// Two-state machine driving button visibility from scroll offsets.
///
/// Transitions are idempotent: repeated events at the same offset leave
/// the same state as a single one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollTopMachine {
    state: Visibility,
}

impl ScrollTopMachine {
    /// A fresh machine; buttons start hidden.
    pub fn new() -> Self {
        Self {
            state: Visibility::Hidden,
        }
    }

    pub fn state(&self) -> Visibility {
        self.state
    }

    /// Feeds one scroll offset and returns the state to render.
    pub fn on_scroll(&mut self, offset: i32) -> Visibility {
        self.state = Visibility::for_offset(offset);
        self.state
    }
}

impl Default for ScrollTopMachine {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders a visibility state onto the button's class list.
///
/// Class-list add/remove is idempotent, so re-entering the current
/// state reapplies identical membership.
fn apply(button: &HtmlElement, visibility: Visibility) {
    let classes = button.class_list();
    classes.remove_1(visibility.cleared()).unwrap_throw();
    classes.add_1(visibility.marker()).unwrap_throw();
}

/// Wires the scroll-to-top behavior onto `button`.
///
/// The button starts hidden, is shown while `document.body.scrollTop`
/// exceeds [`SCROLL_SHOW_THRESHOLD`], and clicking it scrolls the
/// window back to the origin. The click does not transition the
/// machine; the scroll event it causes does. Listeners stay installed
/// for the page lifetime.
pub fn attach_scroll_top(button: &HtmlElement) {
    apply(button, Visibility::Hidden);

    let mut machine = ScrollTopMachine::new();
    let scroll_button = button.clone();
    let on_scroll = Closure::wrap(Box::new(move |_: web_sys::Event| {
        let offset = document().body().map_or(0, |body| body.scroll_top());
        apply(&scroll_button, machine.on_scroll(offset));
    }) as Box<dyn FnMut(_)>);
    window()
        .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
        .unwrap_throw();
    on_scroll.forget();

    let on_click = Closure::wrap(Box::new(move |_: web_sys::Event| {
        window().scroll_to_with_x_and_y(0.0, 0.0);
    }) as Box<dyn FnMut(_)>);
    button
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .unwrap_throw();
    on_click.forget();

    debug!("scroll-to-top behavior attached");
}
