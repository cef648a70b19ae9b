use crate::surface::Rgba;

// Shared visual/audio tuning constants used by the core engines and the web frontend.

// Particle population
pub const DENSITY_AREA_PER_PARTICLE: f32 = 10_000.0; // px² of viewport per particle
pub const PARTICLE_RADIUS_MIN: f32 = 1.0;
pub const PARTICLE_RADIUS_MAX: f32 = 4.0; // exclusive
pub const PARTICLE_SPEED_MAX: f32 = 0.5; // per-axis |velocity| bound, px per frame

// Pulse
pub const PULSE_STEP_PER_FRAME: f32 = 0.02; // phase advance (radians)
pub const PULSE_AMPLITUDE: f32 = 1.0; // px added/removed at the sine peaks
pub const PULSE_PHASE_INIT_MAX: f32 = std::f32::consts::PI; // initial phase drawn from [0, PI)

// Node-to-node edges
pub const CONNECT_RADIUS: f32 = 150.0;
pub const EDGE_MAX_OPACITY: f32 = 0.5;
pub const EDGE_LINE_WIDTH: f32 = 0.8;

// Node-to-pointer edges
pub const POINTER_RADIUS: f32 = 180.0; // kept above CONNECT_RADIUS
pub const POINTER_EDGE_MAX_OPACITY: f32 = 0.8;
pub const POINTER_EDGE_LINE_WIDTH: f32 = 1.5;

// Palette
pub const VIOLET: Rgba = Rgba::rgb(168, 85, 247);
pub const GREEN: Rgba = Rgba::rgb(34, 197, 94);
pub const VIOLET_NODE_ALPHA: f32 = 0.4;
pub const GREEN_NODE_ALPHA: f32 = 0.3;

// Text scramble
pub const SCRAMBLE_WINDOW_FRAMES: u32 = 40; // start and duration are each drawn from [0, window)
pub const SCRAMBLE_REROLL_PROBABILITY: f64 = 0.28; // chance a glitch glyph changes on a given frame
pub const SCRAMBLE_GLYPHS: &str = "!<>-_\\/[]{}—=+*^?#________";
pub const SCRAMBLE_ACTIVE_CLASS: &str = "scramble-char";
pub const REVEAL_DELAY_MS: i32 = 500; // delay between first visibility and the initial reveal
pub const REVEAL_VISIBILITY_THRESHOLD: f64 = 0.5;

// Cursor glow
pub const CURSOR_FOLLOW_FACTOR: f32 = 0.1; // fraction of the remaining distance covered per frame
pub const CURSOR_MIN_VIEWPORT_WIDTH: f32 = 768.0; // glow disabled at or below this width

// Card hover (shine, tilt, magnetic pull)
pub const HOVER_TILT_DIVISOR: f32 = 10.0; // px of offset from centre per degree of tilt
pub const HOVER_TILT_PERSPECTIVE_PX: f32 = 1000.0;
pub const HOVER_TILT_LIFT_PX: f32 = 10.0;
pub const HOVER_BUTTON_STRENGTH: f32 = 0.6; // fraction of the offset a button follows
pub const HOVER_ICON_STRENGTH: f32 = 0.4;
pub const HOVER_MAGNET_SCALE: f32 = 1.1;
pub const HOVER_MIN_VIEWPORT_WIDTH: f32 = 768.0;

// Contact form uplink
pub const UPLINK_PHRASES: [&str; 3] = [
    "ENCRYPTING DATA...",
    "ROUTING TO AGENT...",
    "UPLINK ESTABLISHED",
];
pub const UPLINK_PAUSE_MS: i32 = 800; // gap between phrases
pub const UPLINK_RESTORE_MS: i32 = 2000; // how long the final phrase stays up after success
pub const UPLINK_SUCCESS_MESSAGE: &str = "Transmission Received. Strategy Agent assigned.";
pub const UPLINK_INCOMPLETE_MESSAGE: &str = "Please fill in all fields";
pub const NOTICE_LIFETIME_MS: i32 = 5000;
pub const NOTICE_EXIT_MS: i32 = 300; // slide-out animation before removal

// Secure input feedback
pub const INPUT_TICK_DEBOUNCE_MS: i32 = 100;
