use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::spatial::fixed_math::FixedNum;
use crate::spatial::pathfinding::{Connectivity, GridGraph};
use crate::spatial::visibility::{RadiusShape, VisibilityMap};

/// Default location of the tuning file, relative to the working directory.
pub const SPATIAL_CONFIG_PATH: &str = "assets/spatial_config.ron";

/// Tuning values for the spatial kernel, loaded once at startup.
///
/// Costs are stored as `f32` for readable RON files and converted to
/// [`FixedNum`] when a [`GridGraph`] is built, so searches stay deterministic.
#[derive(Resource, Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SpatialConfig {
    // Field of view
    pub fov_radius: i32,
    pub fov_shape: RadiusShape,

    // Pathfinding
    pub pathfinding_max_iterations: usize,
    pub connectivity: Connectivity,
    pub cardinal_cost: f32,
    pub diagonal_cost: f32,
    pub allow_corner_cutting: bool,
}

impl Default for SpatialConfig {
    fn default() -> Self {
        Self {
            fov_radius: 8,
            fov_shape: RadiusShape::Circle,
            pathfinding_max_iterations: 10_000,
            connectivity: Connectivity::Eight,
            cardinal_cost: 1.0,
            diagonal_cost: 1.414,
            allow_corner_cutting: false,
        }
    }
}

impl SpatialConfig {
    /// Grid graph over `is_blocked` with this config's connectivity and costs.
    pub fn grid_graph<B>(&self, is_blocked: B) -> GridGraph<B>
    where
        B: FnMut(IVec2) -> bool,
    {
        GridGraph::new(is_blocked, self.connectivity)
            .with_costs(
                FixedNum::from_num(self.cardinal_cost),
                FixedNum::from_num(self.diagonal_cost),
            )
            .with_corner_cutting(self.allow_corner_cutting)
    }

    /// Empty visibility buffer sized for `fov_radius`.
    pub fn visibility_map(&self) -> VisibilityMap {
        VisibilityMap::new(self.fov_radius)
    }
}

/// Read and parse a RON config file.
pub fn read_spatial_config(path: &str) -> Result<SpatialConfig, Box<dyn std::error::Error>> {
    let contents = std::fs::read_to_string(path)?;
    let config = ron::from_str::<SpatialConfig>(&contents)?;
    Ok(config)
}

/// Load the config at `path`, falling back to defaults on any error.
pub fn load_spatial_config(path: &str) -> SpatialConfig {
    match read_spatial_config(path) {
        Ok(config) => {
            info!("[CONFIG] Loaded spatial config from {}", path);
            config
        }
        Err(e) => {
            error!("[CONFIG] Failed to load {}: {}", path, e);
            error!("[CONFIG] Using default SpatialConfig");
            SpatialConfig::default()
        }
    }
}

/// Inserts [`SpatialConfig`] as a resource at `Startup`.
///
/// Reads from [`SPATIAL_CONFIG_PATH`] unless another path is given.
pub struct SpatialConfigPlugin {
    pub path: String,
}

impl Default for SpatialConfigPlugin {
    fn default() -> Self {
        Self {
            path: SPATIAL_CONFIG_PATH.to_string(),
        }
    }
}

impl Plugin for SpatialConfigPlugin {
    fn build(&self, app: &mut App) {
        let path = self.path.clone();
        app.add_systems(Startup, move |mut commands: Commands| {
            commands.insert_resource(load_spatial_config(&path));
        });
    }
}
