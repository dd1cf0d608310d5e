pub mod config;
pub mod constants;
pub mod error;
pub mod kinematics;
pub mod light;
pub mod loudness;
pub mod model;
pub mod spawner;
pub mod state;
pub mod world;

pub use config::*;
pub use error::*;
pub use model::{MeshVertex, ModelAsset};
pub use spawner::Spawner;
pub use state::*;
pub use world::*;
