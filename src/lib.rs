//! Python-facing bindings for the checkpoint-racing environment.
//!
//! [`FlatTrackEnv`] exposes a [`racer::TrackEnv`] through flat `f32` buffers
//! and JSON strings, which is all an external training loop needs. With the
//! `python` feature it is wrapped as the `racer_py.TrackEnv` class.

mod flat;
#[cfg(feature = "python")]
mod python;

pub use flat::{BindingError, FlatTrackEnv};
