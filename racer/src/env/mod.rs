mod errors;
mod track;
mod traits;
mod types;
mod vec_env;

pub use errors::EnvError;
pub use track::{StepInfo, TrackEnv};
pub use traits::Env;
pub use types::{Step, TrajectoryShard};
pub use vec_env::VecEnv;
