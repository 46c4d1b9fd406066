//! # Audio-Core: sample format helpers
//!
//! Small conversions used by the audio processing pipeline. The scalar and
//! slice conversions work in place; `q14_vec_to_float` allocates its output.
//!
//! ## Usage
//!
//! ```rust
//! use rtckit_audio_core::conversion::{q14_to_float, Q14};
//!
//! assert_eq!(q14_to_float(16384), 1.0);
//! assert_eq!(f32::from(Q14(8192)), 0.5);
//! ```

pub mod conversion;
pub mod error;

pub use conversion::{q14_slice_to_float, q14_to_float, q14_vec_to_float, Q14};
pub use error::{AudioError, AudioResult};

/// Version information for the audio library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
