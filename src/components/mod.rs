use leptos::prelude::{LocalStorage, StoredValue};

use crate::topology::{ForceGraphLayout, TopologyEditor};

pub mod toolbar;
pub mod topology_canvas;

/// The one editor the toolbar and the canvas both drive.
pub type SharedEditor = StoredValue<TopologyEditor<ForceGraphLayout>, LocalStorage>;
