/// Visual and behavioral constants.

// --- Particle colors (hex) ---
pub const PARTICLE_AMBIENT: u32 = 0x8B5CF6;
pub const PARTICLE_TRAIL: u32 = 0xC084FC;
pub const PARTICLE_BURST: u32 = 0xA855F7;
pub const NODE_FILL: u32 = 0x6B3A96;
pub const NODE_CORE: u32 = 0xC084FC;
pub const LINK_NODE: u32 = 0x8B5CF6;
pub const LINK_PARTICLE: u32 = 0xC084FC;

// --- Particle glow radii ---
pub const GLOW_AMBIENT: f64 = 8.0;
pub const GLOW_TRAIL: f64 = 15.0;
pub const GLOW_BURST: f64 = 12.0;
pub const GLOW_NODE: f64 = 20.0;

// --- Population density (one per N square units) ---
pub const PARTICLE_AREA_DIVISOR: f64 = 12_000.0;
pub const NODE_AREA_DIVISOR: f64 = 80_000.0;
pub const NODE_BASE_COUNT: usize = 8;

// --- Motion ---
pub const AMBIENT_SPEED: f64 = 0.4;
pub const NODE_SPEED: f64 = 0.25;
pub const VELOCITY_DAMPING: f64 = 0.999;
pub const PULSE_AMPLITUDE: f64 = 0.3;

// --- Pointer interaction ---
pub const POINTER_RADIUS: f64 = 100.0;
pub const POINTER_PULL: f64 = 0.02;
pub const POINTER_GLOW: f64 = 0.5;
pub const TRAIL_CHANCE: f64 = 0.3;
pub const TRAIL_LIFE: u32 = 60;

// --- Proximity connections ---
pub const NODE_LINK_DIST: f64 = 150.0;
pub const NODE_LINK_ALPHA: f64 = 0.5;
pub const PARTICLE_LINK_DIST: f64 = 80.0;
pub const PARTICLE_LINK_ALPHA: f64 = 0.3;

// --- Burst shapes ---
pub const HOVER_BURST_COUNT: usize = 6;
pub const HOVER_BURST_RING: f64 = 30.0;
pub const HOVER_BURST_LIFE: u32 = 40;
pub const CLICK_BURST_COUNT: usize = 12;
pub const CLICK_BURST_LIFE: u32 = 80;
pub const BUTTON_BURST_COUNT: usize = 20;
pub const BUTTON_BURST_LIFE: u32 = 100;
pub const SUBMIT_WAVE_COUNT: usize = 50;
pub const SUBMIT_WAVE_LIFE: u32 = 120;

// --- Navbar / scrolling ---
pub const NAV_HEIGHT: f64 = 64.0;
pub const NAV_SOLID_AT: f64 = 50.0;
pub const NAV_HIDE_AT: f64 = 200.0;
pub const NAV_ANCHOR_OFFSET: f64 = 120.0;
pub const SCROLL_ANIM_MS: f64 = 450.0;
pub const SCROLL_WHEEL_STEP: f64 = 48.0;

// --- Section reveal ---
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_MARGIN: f64 = 50.0;
pub const REVEAL_ANIM_MS: f64 = 600.0;
pub const REVEAL_STAGGER_MS: f64 = 100.0;

// --- Search ---
pub const SEARCH_DEBOUNCE_MS: u64 = 200;
pub const EXPAND_SCROLL_DELAY_MS: f64 = 200.0;

// --- Entry fade ---
pub const LOAD_FADE_DELAY_MS: f64 = 100.0;
pub const LOAD_FADE_MS: f64 = 500.0;

// --- Dashboard layout ---
pub const CONTENT_MAX_W: f64 = 960.0;
pub const HERO_H: f64 = 180.0;
pub const SEARCH_BOX_H: f64 = 44.0;
pub const SEARCH_AREA_H: f64 = 120.0;
pub const NO_RESULTS_H: f64 = 120.0;
pub const VIEW_BOTTOM_PAD: f64 = 80.0;
pub const REVEAL_SHIFT: f64 = 30.0;
pub const CARD_CORNER_RADIUS: f64 = 10.0;
pub const CARD_GAP: f64 = 16.0;
pub const CARD_HEADER_H: f64 = 76.0;
pub const SECTION_CORNER_RADIUS: f64 = 8.0;
pub const SECTION_PAD: f64 = 14.0;
pub const TAG_H: f64 = 24.0;
pub const TAG_GAP: f64 = 8.0;
pub const TAG_CORNER_RADIUS: f64 = 12.0;

// --- Typography (monospace, width approximated as 0.6 em) ---
pub const FONT_TITLE: f64 = 20.0;
pub const FONT_BODY: f64 = 13.0;
pub const FONT_SMALL: f64 = 11.0;
pub const CHAR_W_FACTOR: f64 = 0.6;
