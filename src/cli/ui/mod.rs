pub mod chart;
pub mod table_renderer;

pub use chart::{render_bar_chart, render_pie_chart};
pub use table_renderer::{Alignment, Table, TableColumn};
