pub mod scraper;

pub use scraper::{encode_image, format_created_at, scrape_profile};
