//! Pure decision logic for the page's event-driven effects.
//!
//! Each handler takes plain event data (scroll offsets, pointer
//! coordinates, element boxes) and returns a typed decision; the wasm glue
//! owns reading events and applying the results. Class membership and inline
//! styles go through the two capability traits below so host tests can
//! substitute recording doubles for real elements.

use crate::config;
use crate::config::dom;

/// Something that can gain and lose CSS classes.
pub trait ClassList {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
}

/// Something with settable inline style properties.
pub trait StyleSurface {
    fn set_style(&self, property: &str, value: &str);
}

/// Navbar switches to its solid state once the page scrolled past the
/// threshold.
pub fn nav_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::NAV_SCROLL_THRESHOLD
}

pub fn apply_nav_state(scroll_y: f64, nav: &impl ClassList) {
    if nav_scrolled(scroll_y) {
        nav.add_class(dom::CLASS_SCROLLED);
    } else {
        nav.remove_class(dom::CLASS_SCROLLED);
    }
}

/// Scroll depth as a percentage of the scrollable distance, clamped to
/// [0, 100]. A page that cannot scroll reports 0 instead of dividing by
/// zero.
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let track = document_height - viewport_height;
    if track <= 0.0 {
        return 0.0;
    }
    (scroll_y / track * 100.0).clamp(0.0, 100.0)
}

/// Element geometry as delivered by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ElementBox {
    /// Pointer offset from the element's center, in viewport coordinates.
    pub fn offset_from_center(&self, client_x: f64, client_y: f64) -> (f64, f64) {
        (
            client_x - (self.left + self.width / 2.0),
            client_y - (self.top + self.height / 2.0),
        )
    }
}

/// `translate(…px, …px)` for inline transforms.
pub fn translate_css(dx: f64, dy: f64) -> String {
    format!("translate({dx}px, {dy}px)")
}

/// Cursor-outline transform; the translate keeps the ring centered on the
/// coordinates the trail writes to `left`/`top`.
pub fn cursor_scale_css(scale: f64) -> String {
    format!("translate(-50%, -50%) scale({scale})")
}

/// Hovered links and cards drift toward the pointer.
pub fn magnet_shift(rect: ElementBox, client_x: f64, client_y: f64) -> (f64, f64) {
    let (dx, dy) = rect.offset_from_center(client_x, client_y);
    (
        dx * config::HOVER_MAGNET_FACTOR,
        dy * config::HOVER_MAGNET_FACTOR,
    )
}

/// 3D tilt of a project card under the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTilt {
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
    pub lift_px: f64,
}

impl CardTilt {
    pub fn from_pointer(rect: ElementBox, client_x: f64, client_y: f64) -> Self {
        let (dx, dy) = rect.offset_from_center(client_x, client_y);
        Self {
            // Pointer below center tips the card away, hence the sign flip.
            rotate_x_deg: -dy / config::TILT_DIVISOR,
            rotate_y_deg: dx / config::TILT_DIVISOR,
            lift_px: config::TILT_LIFT_PX,
        }
    }

    /// The card at rest, used when the pointer leaves.
    pub fn rest() -> Self {
        Self {
            rotate_x_deg: 0.0,
            rotate_y_deg: 0.0,
            lift_px: 0.0,
        }
    }

    pub fn css(&self) -> String {
        format!(
            "rotateX({}deg) rotateY({}deg) translateY({}px)",
            self.rotate_x_deg, self.rotate_y_deg, self.lift_px
        )
    }
}

/// Drift of the hero layers toward the pointer; the text layer moves at a
/// fraction of the image layer so the two separate visually.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxShift {
    pub image: (f64, f64),
    pub content: (f64, f64),
}

impl ParallaxShift {
    pub fn from_pointer(rect: ElementBox, client_x: f64, client_y: f64) -> Self {
        let (dx, dy) = rect.offset_from_center(client_x, client_y);
        let image = (dx / config::PARALLAX_DIVISOR, dy / config::PARALLAX_DIVISOR);
        Self {
            image,
            content: (
                image.0 * config::PARALLAX_CONTENT_FACTOR,
                image.1 * config::PARALLAX_CONTENT_FACTOR,
            ),
        }
    }

    pub fn rest() -> Self {
        Self {
            image: (0.0, 0.0),
            content: (0.0, 0.0),
        }
    }
}

/// Section id a fragment link points at; bare `#` does not navigate.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|rest| !rest.is_empty())
}

/// Whether a nav link's href targets the given section.
pub fn links_to(href: Option<&str>, section_id: &str) -> bool {
    href.and_then(fragment_target) == Some(section_id)
}

/// Give `link` the `active` class iff its href targets `section_id`.
///
/// Applied across the whole nav this moves the highlight onto exactly one
/// link; both the section observer and the click handler route through it.
pub fn apply_active_link(href: Option<&str>, section_id: &str, link: &impl ClassList) {
    if links_to(href, section_id) {
        link.add_class(dom::CLASS_ACTIVE);
    } else {
        link.remove_class(dom::CLASS_ACTIVE);
    }
}

/// Incremental reveal of the hero tagline.
#[derive(Debug, Clone)]
pub struct Typewriter {
    chars: Vec<char>,
    index: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            index: 0,
        }
    }

    /// Next character to append, or `None` once the text is fully typed.
    pub fn step(&mut self) -> Option<char> {
        let ch = self.chars.get(self.index).copied()?;
        self.index += 1;
        Some(ch)
    }

    pub fn is_done(&self) -> bool {
        self.index >= self.chars.len()
    }
}
