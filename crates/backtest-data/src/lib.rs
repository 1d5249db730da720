//! Bar sources for the backtester.

mod csv_source;
mod feed;

pub use csv_source::{load_csv, read_bars};
pub use feed::BarFeed;
