use anyhow::{bail, Context, Result};
use colored::*;
use maybe_type::{Maybe, MaybeIteratorExt};
use std::env;
use std::fmt::Display;

/// Command-line spelling of an absent operand.
const ABSENT: &str = "-";

fn main() {
    let args: Vec<String> = env::args().collect();

    if let Err(e) = run(&args) {
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

fn run(args: &[String]) -> Result<()> {
    let program = args.first().map(String::as_str).unwrap_or("maybe");
    let command = match args.get(1) {
        Some(command) => command.as_str(),
        None => bail!(
            "Usage: {} <first|find|zip|json|--version> [args...]",
            program
        ),
    };
    let rest = &args[2..];

    match command {
        "first" => report(rest.iter().first_maybe()),
        "find" => {
            let needle = rest.first().context("find expects a needle")?;
            report(rest[1..].iter().first_maybe_where(|item| *item == needle));
        }
        "zip" => {
            let left = operand(rest.first()).context("zip expects a left operand")?;
            let right = operand(rest.get(1)).context("zip expects a right operand")?;
            report(left.zip_with(right, |l, r| format!("{}{}", l, r)));
        }
        "json" => {
            let text = rest.first().context("json expects a document")?;
            let parsed: Maybe<serde_json::Value> = serde_json::from_str(text)
                .with_context(|| format!("Invalid JSON: {}", text))?;
            report(parsed);
        }
        "--version" | "-V" => print_version(),
        other => bail!("Unknown command: {}", other),
    }

    Ok(())
}

fn operand(arg: Option<&String>) -> Option<Maybe<&str>> {
    arg.map(|arg| Maybe::create(arg.as_str()).filter(|s| *s != ABSENT))
}

fn report<T: Display>(result: Maybe<T>) {
    result.fold(
        || println!("{}", "Empty".yellow()),
        |value| println!("{}", format!("Some({})", value).green()),
    );
}

fn print_version() {
    println!(
        "{} {} ({} {})",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("MAYBE_GIT_HASH"),
        env!("MAYBE_BUILD_TIME")
    );
    println!("api {}", env!("MAYBE_VERSION_MAJOR_MINOR").dimmed());
}
