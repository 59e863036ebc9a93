// crates/core/src/lib.rs
//! PressKit Markets report generator.
//!
//! Pure, deterministic text generation over one market's statistics plus
//! cross-market averages. No I/O: the server crate materializes the inputs
//! and serializes the output.

pub mod format;
pub mod news_article;
pub mod press_release;
pub mod rankings;
pub mod types;

pub use format::*;
pub use news_article::generate_news_article;
pub use press_release::generate_press_release;
pub use rankings::*;
pub use types::*;
