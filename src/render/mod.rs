//! Rendering pipeline: cells, surfaces, painter, repaint queue, terminal driver.

pub mod cell;
pub mod driver;
pub mod painter;
pub mod repaint;
pub mod surface;

pub use cell::{parse_color, Cell, CellStyle};
pub use driver::Driver;
pub use painter::Painter;
pub use repaint::{Notifier, RepaintQueue, DEFAULT_REPAINT_CAPACITY};
pub use surface::{Screen, Surface};
