pub mod render;
pub mod view;

#[cfg(test)]
mod view_test;

pub use render::{render_svg, RenderError};
pub use view::{panels, Layout, Marker, Metric, Panel, Series, View, ViewError};
