// DOM hooks the page markup exposes to the effects layer.

// Particle backdrop
pub const CANVAS_ID: &str = "neuralNetwork";

// Text scramble
pub const SCRAMBLE_SELECTOR: &str = ".section-title, .hero-title .kinetic-text:not(.gradient-text)";
pub const SCRAMBLE_KEY_ATTR: &str = "data-scramble-key"; // index into the engine list

// Contact form uplink sequence
pub const CONTACT_FORM_ID: &str = "contactForm";
pub const CONTACT_FIELD_IDS: [&str; 4] = ["name", "email", "subject", "message"];
pub const NOTICE_CLASS: &str = "notification";

// Audio cues
pub const CUE_SELECTOR: &str =
    ".nav-link, .btn, .service-card, .portfolio-item, .arch-layer, .social-icon";
pub const AUDIO_ACTIVATION_EVENTS: [&str; 3] = ["mousedown", "touchstart", "scroll"];
pub const SECURE_INPUT_SELECTOR: &str = ".form-group input, .form-group textarea";

// Card hover
pub const HOVER_SELECTOR: &str =
    ".service-card, .portfolio-item, .stat-item, .info-card, .btn, .social-icon";

// Cursor glow
pub const CURSOR_WRAPPER_CLASS: &str = "cursor-wrapper";
pub const CURSOR_GLOW_CLASS: &str = "cursor-glow";
pub const ACTIVE_CLASS: &str = "active";
