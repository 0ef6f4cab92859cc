use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use argjson::{parse_program, write_document, Grammar, Layout, SyntaxError};
use clap::Parser as ClapParser;
use tracing::*;

mod config;
mod logging;
mod report;

const GRAMMAR_HELP: &str = "\
Each argument is exactly one token, so brackets and keys must be separate arguments.
Objects use [ and ] because braces are special to some shells; keys end in a colon.

    $ json foo: 45 bar: [ x: 657 ] y: .[ 3 5 6 ]
    {\"foo\":45,\"bar\":{\"x\":657},\"y\":[3,5,6]}

Grammar (STR is any argument, KEY is an argument ending in \":\"):

    args          = { value } | keyValues
    value         = \"null\" | \"true\" | \"false\" | typeAssertion | object | array | STR
    typeAssertion = ( \"str\" | \"num\" | \"bool\" | \"json\" | \"jsonstr\" ) value
    object        = \"[\" keyValues \"]\"
    keyValues     = { key value }
    key           = KEY | \"key\" STR
    array         = \".[\" { value } \"]\"

When the first argument is a key, all arguments form a single object, so
`json a: b` is the same as `json [ a: b ]`. Otherwise every argument starts an
independent value and each one is printed on its own line.

A plain argument is a number if it reads as one and a string otherwise. Type
assertions pin down the type of values that come from outside, such as
environment variables:

    key      the next argument is an object key, taken verbatim
                 $ json key 'a\"b' hello          ->  {\"a\\\"b\":\"hello\"}
    str      the next argument is a string
                 $ json str [                     ->  \"[\"
    num      the next argument must be a finite number; its text is kept as is
                 $ json num 1.50                  ->  1.50
    bool     the next argument must be one of 1 t T TRUE true True 0 f F FALSE false False
                 $ json bool 0                    ->  false
    json     the next argument is JSON text, included as is; it must hold exactly one
             JSON value, and anything after that value is an error
                 $ json [ one: 1 two: json '[\"two\", 2]' ]
    jsonstr  the next value is encoded as JSON and used as a string
                 $ json jsonstr [ a: 45 ]         ->  \"{\\\"a\\\":45}\"

Exit status is 0 on success, 1 when the arguments or configuration are invalid
and 2 on usage errors.";

#[derive(Debug, ClapParser)]
#[command(name = "json", author, version, about, long_about = None, after_long_help = GRAMMAR_HELP)]
struct Args {
    /// Indent JSON output; by default it is printed compactly.
    #[arg(short, long)]
    indent: bool,

    /// The string used for one level of indentation with `--indent` [default: tab].
    #[arg(long, value_name = "STR")]
    indent_unit: Option<String>,

    /// How arguments that do not start with an object key are read [default: sequence].
    #[arg(long, value_enum)]
    grammar: Option<Grammar>,

    /// A TOML file with default settings.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// The arguments describing the JSON value(s), see `--help`.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() -> ExitCode {
    logging::setup_logging();

    let cli = Args::parse();

    debug!(?cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match e.downcast_ref::<SyntaxError>() {
                Some(syntax) => {
                    if let Err(render_err) = report::emit(&cli.args, syntax) {
                        warn!(%render_err, "failed to render error report");
                        eprintln!("json: {syntax}");
                    }
                }
                None => eprintln!("json: {e:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Args) -> anyhow::Result<()> {
    let config = config::load(cli.config.as_deref()).context("failed to load configuration")?;
    debug!(?config);

    let grammar = cli.grammar.or(config.grammar).unwrap_or_default();
    let layout = if cli.indent {
        Layout::Indented(cli.indent_unit.clone().unwrap_or(config.indent_unit))
    } else {
        Layout::Compact
    };

    let document = parse_program(&cli.args, grammar)?;
    info!(values = document.values().len(), "parsed arguments");

    let mut out = BufWriter::new(io::stdout().lock());
    write_document(&mut out, &document, &layout).context("failed to write JSON")?;
    out.flush().context("failed to write JSON")?;

    Ok(())
}
