//! Circle drawing engine for a single full-window canvas.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! behavior of the drawing surface: turning pointer gestures into circles,
//! hit-testing taps and clicks, deleting on double-click, cycling fill colors,
//! coalescing resizes, and repainting the scene. The host UI layer only wires
//! DOM events to the engine and carries out the returned [`engine::Action`]s
//! (arming timers, showing the feedback overlay, requesting frames).
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`doc`] | Ordered circle store and the [`doc::Circle`] type |
//! | [`input`] | Button identifiers and the gesture state machine |
//! | [`hit`] | Topmost-circle hit-testing |
//! | [`feedback`] | The transient "Hit" / "Miss" indicator |
//! | [`color`] | HSL colors and the hue cycle |
//! | [`viewport`] | Logical geometry, device pixel ratio, backing size |
//! | [`schedule`] | Cancellable single-slot timers keyed by [`schedule::Ticket`] |
//! | [`render`] | Scene painting through the [`render::Surface`] capability |
//! | [`config`] | Tunable thresholds and styling ([`config::CanvasConfig`]) |
//! | [`consts`] | Default values for the tunables |

pub mod color;
pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod feedback;
pub mod hit;
pub mod input;
pub mod render;
pub mod schedule;
pub mod viewport;
