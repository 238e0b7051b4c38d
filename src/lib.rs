//! Actuated mass-spring arms for games and interactive demos.
//!
//! `tendril` simulates a tapering, octopus-arm-like lattice of point masses
//! joined by springs whose rest lengths relax under load. Drive channels
//! shorten the arm's edge springs to curl it; idle springs grow back.
//!
//! # Features
//!
//! - **Polar impulses**: point velocities are (heading, speed) pairs composed
//!   impulse by impulse
//! - **Relaxing springs**: rest lengths decay towards the current length in
//!   proportion to the force, like a Maxwell fluid
//! - **Generated topology**: one call builds anchors, points and five springs
//!   per segment in a fixed, addressable order
//! - **Actuation**: channel maps from drive signals to segments, with a floor
//!   on shrinking and passive restore
//! - **Snapshots**: owned, read-only views for renderers
//! - **Observable**: monitor ticks via the `StepObserver` trait
//! - **`no_std` compatible**: works in embedded and WASM environments
//!
//! ```
//! use tendril::{ArmConfig, ChannelMap, NoOpStepObserver, Simulation};
//!
//! let config: ArmConfig<f32> = ArmConfig::new()
//!     .with_segments(6)
//!     .with_channels(ChannelMap::one_to_one(6));
//! let mut sim = Simulation::new(config).unwrap();
//! let mut signals = sim.idle_signals();
//! signals.set_keys(0, true, false).unwrap();
//! for _ in 0..30 {
//!     sim.step(&signals, &mut NoOpStepObserver);
//! }
//! let frame = sim.snapshot();
//! assert_eq!(frame.springs.len(), 30);
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod point;
pub mod spring;
pub mod lattice;
pub mod actuator;
pub mod simulation;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::{add_vectors, distance, Polar, Vec2};
pub use point::{MassPoint, PointKind};
pub use spring::{Envelope, RestLimits, Spring};
pub use lattice::Lattice;
pub use actuator::{Actuator, ChannelMap, Drive, DriveSignals};
pub use simulation::{PointView, Simulation, Snapshot, SpringView};
pub use config::{ArmConfig, SpringStrengths};
pub use observer::{NoOpStepObserver, PeakForceObserver, StepObserver};
#[cfg(feature = "log")]
pub use observer::LogStepObserver;
pub use error::ArmError;
