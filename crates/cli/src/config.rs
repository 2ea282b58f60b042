// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::AppError;
use crate::parsers::non_empty;
pub use filestats_engine::config::{Config, ConfigBuilder};
use filestats_engine::options::Selector;

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let selectors: Vec<Selector> = non_empty(args.extensions)
            .into_iter()
            .map(|ext| {
                if ext == "*" {
                    Selector::Any
                } else {
                    Selector::Suffix(ext)
                }
            })
            .collect();

        let max_line_bytes = usize::try_from(args.max_line_length.0).unwrap_or(usize::MAX);

        let config = ConfigBuilder::default()
            .roots(non_empty(args.dirs))
            .selectors(selectors)
            .ignore(non_empty(args.ignore))
            .include_all(args.include_all)
            .max_line_bytes(max_line_bytes)
            .strict(args.strict)
            .build()?;
        Ok(config)
    }
}
