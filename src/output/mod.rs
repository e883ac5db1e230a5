pub mod formatter;

pub use formatter::{
    format_age, format_feed_table, format_match_detail, format_tsv, should_use_colors,
};
