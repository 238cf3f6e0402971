//! Topology model and layout policy, independent of any UI toolkit.

pub mod config;
pub mod device;
pub mod editor;
pub mod error;
pub mod links;
pub mod placement;
pub mod simulation;
pub mod types;

pub use config::{LayoutConfig, SimulationConfig};
pub use device::{Device, DeviceRegistry, DeviceType};
pub use editor::TopologyEditor;
pub use error::TopologyError;
pub use simulation::{ForceGraphLayout, ForceLayout};
pub use types::{Link, Point, TopologyKind};
