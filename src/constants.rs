//! Site-wide constants.
//!
//! Centralizes magic numbers and style values so the state machines stay
//! free of literals.

// ============================================================================
// Carousel
// ============================================================================

/// Auto-scroll distance per animation frame, in pixels
pub const CAROUSEL_SPEED: f32 = 1.0;

/// Multiplier applied to pointer travel while dragging the track
pub const DRAG_MULTIPLIER: f32 = 1.5;

/// Vertical distance of a tooltip above its item, in pixels
pub const TOOLTIP_OFFSET_Y: f32 = -50.0;

// ============================================================================
// Header & Reveal
// ============================================================================

/// Scroll offset after which the header gets its drop shadow
pub const HEADER_SHADOW_THRESHOLD: f32 = 50.0;

/// Header shadow applied once the page is scrolled
pub const HEADER_SHADOW: &str = "0 2px 20px rgba(0, 0, 0, 0.3)";

/// Visible ratio at which an element is revealed
pub const REVEAL_THRESHOLD: f32 = 0.1;

/// Bottom root margin for reveal observation (shrinks the viewport)
pub const REVEAL_BOTTOM_MARGIN: f32 = 50.0;

// ============================================================================
// Card Stacking
// ============================================================================

/// Sticky top of the first card, in pixels
pub const STACK_BASE_TOP: f32 = 80.0;

/// Additional sticky top per card index
pub const STACK_STEP: f32 = 10.0;

/// Distance over which a stuck card shrinks to its base scale
pub const STACK_PROGRESS_RANGE: f32 = 100.0;

/// Scale lost once a card is fully stuck
pub const STACK_BASE_SHRINK: f32 = 0.05;

/// Distance at which the next card starts pushing the current one
pub const STACK_PUSH_RANGE: f32 = 200.0;

/// Scale lost while the next card pushes
pub const STACK_PUSH_SHRINK: f32 = 0.3;

/// Brightness lost while the next card pushes
pub const STACK_PUSH_DIM: f32 = 0.3;

/// Scale lost while a card is pushed out of view
pub const STACK_EXIT_SHRINK: f32 = 0.2;

/// Brightness lost while a card is pushed out of view
pub const STACK_EXIT_DIM: f32 = 0.5;

// ============================================================================
// Gallery
// ============================================================================

/// Stagger between card entrance animations, in milliseconds
pub const CARD_ANIMATION_STAGGER_MS: u32 = 100;

/// Message shown in place of the gallery when the feed cannot be loaded
pub const GALLERY_ERROR_MESSAGE: &str = "Unable to load projects. Please try again later.";

/// Session storage key for the last clicked project
pub const SELECTED_PROJECT_KEY: &str = "selectedProject";

/// Default location of the project feed
pub const DEFAULT_FEED_PATH: &str = "projects-data.json";

// ============================================================================
// Grid
// ============================================================================

/// Spacing between grid lines, in pixels
pub const GRID_GAP: f32 = 40.0;

/// Canvas background color
pub const GRID_BACKGROUND: &str = "#0a0a0a";

/// Grid line color
pub const GRID_LINE_COLOR: &str = "rgba(255, 255, 255, 0.12)";

/// Amplitude of the vertical line wave
pub const GRID_VERTICAL_AMPLITUDE: f32 = 30.0;

/// Amplitude of the horizontal line wave
pub const GRID_HORIZONTAL_AMPLITUDE: f32 = 50.0;

/// Pull of the pointer on nearby lines
pub const GRID_POINTER_PULL: f32 = 0.05;

/// Spatial frequency of the line wave
pub const GRID_WAVE_FREQUENCY: f32 = 0.01;

/// Outer opacity of the vignette
pub const GRID_VIGNETTE_ALPHA: f32 = 0.8;

// ============================================================================
// Chrome
// ============================================================================

/// Local storage key for the theme preference
pub const THEME_KEY: &str = "theme";

/// Number of keys kept by the konami detector
pub const KONAMI_WINDOW: usize = 10;

/// Length of the easter egg animation, in milliseconds
pub const EASTER_EGG_DURATION_MS: u64 = 2000;

/// Easter egg body animation
pub const EASTER_EGG_ANIMATION: &str = "rotate 2s ease-in-out";

/// Easter egg message
pub const EASTER_EGG_MESSAGE: &str = "🎉 You found the easter egg! You're awesome!";
