//! Domain types shared across the scanner.

mod bar;

pub use bar::{is_ascending, PriceBar};
