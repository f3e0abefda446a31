use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::flat::{BindingError, FlatStep, FlatTrackEnv};

impl From<BindingError> for PyErr {
    fn from(err: BindingError) -> Self {
        match err {
            BindingError::ActionShape(_) => PyValueError::new_err(err.to_string()),
            _ => PyRuntimeError::new_err(err.to_string()),
        }
    }
}

/// Checkpoint-racing environment driven from Python.
#[pyclass(name = "TrackEnv", module = "racer_py", unsendable)]
struct PyTrackEnv {
    inner: FlatTrackEnv,
}

#[pymethods]
impl PyTrackEnv {
    #[new]
    fn new(config_json: &str) -> PyResult<Self> {
        Ok(Self {
            inner: FlatTrackEnv::new(config_json)?,
        })
    }

    /// Start a new episode and return the first observation.
    fn reset(&mut self) -> PyResult<Vec<f32>> {
        Ok(self.inner.reset()?)
    }

    /// Apply one tick of `(throttle, steer)`; returns
    /// `(observation, reward, done, info_json)`.
    fn step(&mut self, throttle: f32, steer: f32) -> PyResult<FlatStep> {
        Ok(self.inner.step(&[throttle, steer])?)
    }

    #[getter]
    fn observation_size(&self) -> usize {
        self.inner.observation_size()
    }

    #[getter]
    fn action_size(&self) -> usize {
        self.inner.action_size()
    }

    #[getter]
    fn cumulative_reward(&self) -> f32 {
        self.inner.cumulative_reward()
    }

    #[getter]
    fn move_distance(&self) -> f32 {
        self.inner.move_distance()
    }
}

/// A Python module implemented in Rust.
/// The name of this function must match the lib.name in Cargo.toml
#[pymodule]
fn racer_py(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyTrackEnv>()?;
    Ok(())
}
