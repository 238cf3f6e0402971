mod component;
pub mod render;

pub use component::TopologyCanvas;
