use crate::env::errors::EnvError;

pub trait Env: Send {
    type Obs: Send + Clone + 'static;
    type Act: Send + Clone + 'static;
    type Info: Send + Clone + 'static;

    fn reset(&mut self) -> Result<Self::Obs, EnvError>;
    fn step(&mut self, act: Self::Act) -> Result<(Self::Obs, f32, bool, Self::Info), EnvError>;
    fn close(&mut self) -> Result<(), EnvError> {
        Ok(())
    }

    /// Number of scalars in one observation.
    fn observation_size(&self) -> usize;

    /// Number of scalars in one action.
    fn action_size(&self) -> usize;
}
