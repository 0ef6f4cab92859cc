use std::path::Path;

use argjson::{Grammar, UnknownGrammar};
use confique::{Config as DeriveConfig, File, FileFormat};

#[derive(Debug, DeriveConfig)]
pub struct Config {
    /// The string repeated once per nesting level when `--indent` is given.
    #[config(default = "\t", env = "JSON_INDENT_UNIT")]
    pub indent_unit: String,

    /// How arguments that do not start with an object key are read: `sequence` prints every
    /// top-level value, `single` insists on exactly one. Defaults to `sequence`.
    #[config(env = "JSON_GRAMMAR", parse_env = parse_grammar)]
    pub grammar: Option<Grammar>,
}

fn parse_grammar(s: &str) -> Result<Grammar, UnknownGrammar> {
    s.parse()
}

/// Environment variables take precedence over the file at `path`.
pub fn load(path: Option<&Path>) -> Result<Config, confique::Error> {
    let mut builder = Config::builder().env();
    if let Some(path) = path {
        // A file named on the command line has to exist.
        let layer = File::with_format(path, FileFormat::Toml).required().load()?;
        builder = builder.preloaded(layer);
    }
    builder.load()
}
