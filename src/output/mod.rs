pub mod formatter;

pub use formatter::{
    format_breakdown, format_tally, format_tsv, format_winner, should_use_colors,
};
