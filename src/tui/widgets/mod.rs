//! Dashboard widgets: gauge, radar canvas, card grids, and the upload view
//! panels. Each widget renders into a `Rect` handed down by the layout.

pub mod cards;
pub mod gauge;
pub mod radar;
pub mod recommendations;
pub mod upload;
