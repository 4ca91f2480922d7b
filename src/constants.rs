/// Interaction tuning, DOM contracts and UI copy.
///
/// Tuning values express intended behavior (easing factors, durations,
/// sizes) and keep magic numbers out of the effect code. Selectors and class
/// names are the binding contract with the markup and stylesheet.

// ---------------- Tuning ----------------

// Cursor dot easing per animation frame (fraction of remaining distance)
pub const CURSOR_LERP_FACTOR: f32 = 0.08;

// Ripple sizing (px) and the viewport width at or below which we are "mobile"
pub const RIPPLE_SIZE_DESKTOP_PX: f32 = 260.0;
pub const RIPPLE_SIZE_MOBILE_PX: f32 = 128.0; // 80% of the old 160px mobile ripple
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
// Must match the grow/fade keyframes of `.ripple`
pub const RIPPLE_ANIMATION_MS: u32 = 1200;

// Fraction of an element that must be visible before it is revealed
pub const REVEAL_THRESHOLD: f64 = 0.15;

// Delay step between staggered lines
pub const STAGGER_STEP_MS: u32 = 200;

// Hover effects
pub const TILT_MAX_DEG: f32 = 8.0;
pub const TILT_PERSPECTIVE_PX: f32 = 1000.0;
pub const MAGNETIC_STRENGTH: f32 = 0.25;

// Background moves at this fraction of the scroll distance
pub const PARALLAX_FACTOR: f32 = 0.15;

// Back-to-top button appears past this scroll offset. The button contract
// (this threshold and SEL_BACK_TO_TOP) is defined here, not by existing
// markup; pages opt in by adding the class.
pub const BACK_TO_TOP_THRESHOLD_PX: f64 = 400.0;

// Navigation feedback
pub const NAV_PULSE_MS: u32 = 500;
pub const HEADER_FLASH_MS: u32 = 120;
pub const NAV_SCROLL_DELAY_MS: u32 = 200;

// Contact feedback
pub const COPY_OK_VISIBLE_MS: u32 = 1500;
pub const COPY_FAIL_VISIBLE_MS: u32 = 2500;
pub const DRAFT_COPY_VISIBLE_MS: u32 = 2000;
pub const DRAFT_FADE_MS: u32 = 150;
pub const DRAFT_DIM_OPACITY: &str = "0.5";

// ---------------- Selectors ----------------

pub const SEL_CURSOR_DOT: &str = ".cursor-dot";
pub const SEL_REVEAL_TARGETS: &str = ".section, .fade-up, .section-title, .section-content";
pub const SEL_SECTION: &str = ".section";
pub const SEL_RIPPLE_EXCLUDED: [&str; 2] = [".copy-btn", "a"];
pub const SEL_STAGGER_TARGETS: &str = ".message .section-content p, .intro-text-block";
pub const SEL_TILT_TARGETS: &str = ".service-card, .consultation-card, .glass-panel";
pub const SEL_SPOTLIGHT_TARGETS: &str = ".glass-panel, .service-card, .consultation-card";
pub const SEL_MAGNETIC_TARGETS: &str = ".is-magnetic";
pub const SEL_PARALLAX_BG: &str = ".global-wave-bg";
pub const SEL_NAV_LINKS: &str = ".kg-nav-link";
pub const SEL_HEADER: &str = ".kg-header";
pub const SEL_NAV_DOT: &str = ".nav-dot";
// New markup contract, see BACK_TO_TOP_THRESHOLD_PX
pub const SEL_BACK_TO_TOP: &str = ".floating-back-btn";
pub const SEL_DRAFT_BUTTONS: &str = ".draft-btn";
pub const SEL_DRAFT_DISPLAY: &str = ".draft-display-box";

pub const ID_TOP_NEWS: &str = "top-news-list";
pub const ID_NEWS_ARCHIVE: &str = "news-archive-list";
pub const ID_COPY_EMAIL: &str = "copy-email";
pub const ID_EMAIL_TEXT: &str = "email-text";
pub const ID_COPY_RESULT: &str = "copy-result";
pub const ID_DRAFT_SUBJECT: &str = "draft-subject";
pub const ID_DRAFT_BODY: &str = "draft-body";
pub const ID_COPY_DRAFT: &str = "copy-draft-btn";
pub const ID_DRAFT_COPY_MSG: &str = "draft-copy-msg";
pub const ID_SITE_CONTENT: &str = "site-content";

pub const ATTR_DRAFT_TYPE: &str = "data-type";
pub const ATTR_REVEAL_ID: &str = "data-reveal-id";

// ---------------- Classes ----------------

pub const CLASS_ACTIVE: &str = "is-active";
pub const CLASS_VISIBLE: &str = "is-visible";
pub const CLASS_SECTION: &str = "section";
pub const CLASS_SECTION_VISIBLE: &str = "section-visible";
pub const CLASS_RIPPLE: &str = "ripple";
pub const CLASS_RIPPLE_MOBILE: &str = "ripple--mobile";
pub const CLASS_STAGGER_TEXT: &str = "stagger-text";
pub const CLASS_SPOTLIGHT: &str = "has-spotlight";
pub const CLASS_MAGNETIC: &str = "is-magnetic";
pub const CLASS_NAV_DOT: &str = "nav-dot";
pub const CLASS_CLICKED: &str = "is-clicked";
pub const CLASS_FLASHING: &str = "is-flashing";

// Custom properties read by the spotlight gradient
pub const VAR_MOUSE_X: &str = "--mouse-x";
pub const VAR_MOUSE_Y: &str = "--mouse-y";
pub const VAR_SPOTLIGHT_OPACITY: &str = "--spotlight-opacity";

// ---------------- Copy ----------------

pub const MSG_EMAIL_COPIED: &str = "メールアドレスをコピーしました。";
pub const MSG_EMAIL_COPY_FAILED: &str =
    "コピーできませんでした。お手数ですが手動でコピーしてください。";
pub const DRAFT_SUBJECT_LABEL: &str = "件名：";
