pub mod markdown;
pub mod output;
