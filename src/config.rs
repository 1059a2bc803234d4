//! Site-wide tunables and the DOM contract.
//!
//! Everything the crate assumes about the host page lives in [`dom`]:
//! element ids, selectors, and class names are configuration-by-convention,
//! checked only by the startup lookups failing loudly when markup drifts.

/// Target frame rate for the helix loop. The scheduler accepts a frame only
/// once more than `1000 / HELIX_FPS` milliseconds have passed since the last
/// accepted one.
pub const HELIX_FPS: f64 = 45.0;

/// Phase advance per accepted frame. A fixed step rather than a delta-scaled
/// one: perceived speed follows frame acceptance, not wall time.
pub const PHASE_STEP: f64 = 0.01;

/// Vertical distance between helix rows, px.
pub const ROW_SPACING: f64 = 20.0;

/// Horizontal swing of each strand around the centerline, px.
pub const STRAND_RADIUS: f64 = 140.0;

/// Angular frequency along the vertical axis, radians per px of row height.
pub const ROW_ANGLE_STEP: f64 = 0.018;

/// Centerline offset from the left edge, as a fraction of the surface width.
pub const CENTER_FRACTION: f64 = 0.7;

/// Warm accent used for every helix element; only alpha and size vary.
pub const ACCENT_RGB: (u8, u8, u8) = (255, 122, 24);

/// The helix only runs on windows wider than this at load time.
pub const HELIX_MIN_WIDTH: f64 = 768.0;

/// The hero parallax only wires up on windows wider than this at load time.
pub const PARALLAX_MIN_WIDTH: f64 = 992.0;

/// Fraction of the remaining gap the cursor outline closes per tick.
pub const CURSOR_EASE: f64 = 0.15;

/// Outline scale while a hoverable element is under the pointer.
pub const CURSOR_HOVER_SCALE: f64 = 1.8;

/// Scroll depth past which the navbar switches to its solid state, px.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

/// Visibility fraction that counts as "revealed" for scroll-reveal elements.
pub const REVEAL_THRESHOLD: f64 = 0.2;

/// Visibility fraction at which a section claims the active nav link.
pub const SECTION_THRESHOLD: f64 = 0.5;

/// Hovered links and cards drift toward the pointer by this share of the
/// pointer's offset from their center.
pub const HOVER_MAGNET_FACTOR: f64 = 0.05;

/// Pointer offset (px) per degree of card tilt.
pub const TILT_DIVISOR: f64 = 15.0;

/// Vertical lift of a tilted card, px (negative = up).
pub const TILT_LIFT_PX: f64 = -8.0;

/// Pointer offset (px) per px of hero layer drift.
pub const PARALLAX_DIVISOR: f64 = 40.0;

/// The hero text layer moves at this share of the image layer's drift.
pub const PARALLAX_CONTENT_FACTOR: f64 = 0.6;

/// Hero tagline typed into the page one character at a time.
pub const TAGLINE_TEXT: &str = "Building intelligent systems to solve real-world problems.";

/// Delay between the page `load` event and the first typed character, ms.
pub const TAGLINE_START_DELAY_MS: i32 = 600;

/// Delay between typed characters, ms.
pub const TAGLINE_CHAR_DELAY_MS: i32 = 40;

/// Routing for the external delivery provider. Replace with the ids of the
/// deployed EmailJS service and template; the provider treats the form's
/// field names as template variables.
pub const EMAIL_SERVICE_ID: &str = "service_portfolio";
pub const EMAIL_TEMPLATE_ID: &str = "template_contact";

/// Ids, selectors, and class names the host page must ship.
pub mod dom {
    pub const CANVAS_ID: &str = "dna-canvas";
    pub const TAGLINE_ID: &str = "typing-tagline";
    pub const SCROLL_BAR_ID: &str = "scrollBar";
    pub const CONTACT_FORM_ID: &str = "contact-form";
    pub const FORM_STATUS_ID: &str = "form-status";
    pub const SUBMIT_BTN_ID: &str = "submit-btn";

    pub const NAV_SELECTOR: &str = "nav";
    pub const NAV_LINKS_SELECTOR: &str = "nav a";
    pub const ANCHOR_SELECTOR: &str = "a[href^='#']";
    pub const SECTION_SELECTOR: &str = "section[id]";
    pub const REVEAL_SELECTOR: &str = ".reveal";
    pub const HOVER_SELECTOR: &str = "a, button, .project-card";
    pub const CARD_SELECTOR: &str = ".project-card";
    pub const HERO_SELECTOR: &str = ".hero";
    pub const HERO_IMAGE_SELECTOR: &str = ".hero-image";
    pub const HERO_CONTENT_SELECTOR: &str = ".hero-content";
    pub const CURSOR_DOT_SELECTOR: &str = ".cursor-dot";
    pub const CURSOR_OUTLINE_SELECTOR: &str = ".cursor-outline";

    pub const CLASS_SHOW: &str = "show";
    pub const CLASS_SCROLLED: &str = "scrolled";
    pub const CLASS_ACTIVE: &str = "active";
    pub const CLASS_CLICK: &str = "click";
    pub const CLASS_LOADING: &str = "loading";
    pub const CLASS_SUCCESS: &str = "success";
    pub const CLASS_ERROR: &str = "error";
    pub const CLASS_FORM_STATUS: &str = "form-status";
}
