use clap::Parser;
use qualex::{Error, Evaluator, Limits, Scope, interpreter::evaluator::core::DEFAULT_MAX_DEPTH};
use tracing_subscriber::EnvFilter;

/// qualex evaluates a configuration section qualifier such as
/// `$env.mode == production && @isEnabled as live` and prints its value and
/// alias.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Binds a variable, as `NAME=VALUE`. The value is read as JSON, or kept
    /// as plain text if it is not valid JSON.
    #[arg(short = 'v', long = "var", value_name = "NAME=VALUE", value_parser = parse_binding)]
    variables: Vec<(String, serde_json::Value)>,

    /// Registers a callback that returns a fixed value, as `NAME=VALUE`.
    #[arg(short = 'c', long = "callback", value_name = "NAME=VALUE", value_parser = parse_binding)]
    callbacks: Vec<(String, serde_json::Value)>,

    /// Deepest parenthesis nesting accepted.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// The qualifier expression to evaluate.
    expression: String,
}

/// Splits `NAME=VALUE` at the first `=`.
fn parse_binding(text: &str) -> Result<(String, serde_json::Value), String> {
    let (name, value) =
        text.split_once('=')
            .ok_or_else(|| format!("expected NAME=VALUE, found '{text}'"))?;
    let value = serde_json::from_str(value).unwrap_or_else(|_| serde_json::Value::from(value));
    Ok((name.to_string(), value))
}

fn main() {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env())
                             .with_writer(std::io::stderr)
                             .init();

    let args = Args::parse();

    let mut scope = Scope::new();
    for (name, value) in args.variables {
        scope.set_variable(name, value);
    }
    for (name, value) in args.callbacks {
        scope.register_callback(name, move || value.clone());
    }

    let mut evaluator =
        Evaluator::new(args.expression).with_limits(Limits { max_depth: args.max_depth });

    match evaluator.evaluate(&scope) {
        Ok(value) => {
            println!("{value}");
            println!("{}", evaluator.alias());
        },
        Err(e) => {
            eprintln!("{e}");
            if let Error::Parse(parse) = &e {
                eprintln!("{}", parse.pointer(evaluator.source()));
            }
            std::process::exit(1);
        },
    }
}
