use std::io::Read;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use getopts::{Matches, Options};
use serde_json::Value;

use hyper_calculator::challenge::{self, ManyTestcases, Testcase};
use hyper_calculator::settings::Settings;
use uuid::Uuid;

fn main() -> Result<()> {
    let args: Vec<_> = std::env::args().collect();
    let program = args
        .first()
        .cloned()
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").into());

    let mut opts = Options::new();
    opts.parsing_style(getopts::ParsingStyle::FloatingFrees);
    opts.optflag("h", "help", "print this help menu");
    opts.optflag(
        "V",
        "version",
        &format!("print the version of {}", env!("CARGO_PKG_NAME")),
    );
    opts.optflag("v", "verbose", "print debug information to stderr");
    opts.optflag("", "example", "print an example challenge definition and exit");
    opts.optopt("t", "threads", "amount of worker threads", "N");
    opts.optopt("e", "eval", "evaluate a single expression like '12 * -3'", "EXPR");

    let matches = match opts.parse(args.iter().skip(1)) {
        Ok(m) => m,
        Err(e) => {
            eprintln!("{e}");
            usage_and_exit(&opts, &program);
        }
    };

    if matches.opt_present("help") {
        usage_and_exit(&opts, &program);
    }

    if matches.opt_present("version") {
        eprintln!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
        std::process::exit(0);
    }

    let settings = get_settings(&matches)?;

    if matches.opt_present("example") {
        let mut example = ManyTestcases::new();
        example.insert(Uuid::default(), Testcase::default());
        println!("{:#}", serde_json::json!({ "testcases": example }));
        return Ok(());
    }

    if let Some(expression) = matches.opt_str("eval") {
        println!("{}", challenge::expr::eval(&expression, settings)?);
        return Ok(());
    }

    if matches.free.len() != 1 {
        eprintln!("! No JSON file was provided for the challenge definition");
        usage_and_exit(&opts, &program);
    }
    let raw_text = read_definition(&matches.free[0])?;
    let json_value: Value = serde_json::from_str(&raw_text).inspect_err(|e| {
        eprintln!("! Could not parse the text of the challenge definition file as JSON: {e}")
    })?;
    if settings.verbose {
        eprintln!("? challenge definition: {json_value:#}");
    }

    // print our response to stdout
    println!("{}", challenge::run_challenges(&json_value, settings)?);

    Ok(())
}

fn get_settings(matches: &Matches) -> Result<Settings> {
    let threads: Option<usize> = matches
        .opt_get::<usize>("threads")
        .map_err(|e| anyhow!("threads must be a number: {e}"))?;
    if threads == Some(0) {
        return Err(anyhow!("threads must be at least 1"));
    }
    Ok(Settings {
        verbose: matches.opt_present("verbose"),
        threads,
    })
}

/// Read the challenge definition from a file, or from stdin if the path is `-`
fn read_definition(path: &str) -> Result<String> {
    if path == "-" {
        eprintln!("* Reading the challenge definition from stdin");
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .inspect_err(|e| eprintln!("! Could not read stdin: {e}"))?;
        return Ok(buf);
    }
    let path: PathBuf = path.into();
    eprintln!("* Path of the challenge definition: {:?}", path);
    eprintln!("* Reading the challenge definition into memory");
    Ok(std::fs::read_to_string(&path)
        .inspect_err(|e| eprintln!("! Could not read the challenge definition file: {e}"))?)
}

// `!` is a pseudo type and means the function will never return
fn usage_and_exit(opts: &Options, program: &str) -> ! {
    eprintln!("{}", opts.usage(&opts.short_usage(program)));
    std::process::exit(1);
}
