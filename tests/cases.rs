use std::fs;

use qualex::{Error, RuntimeError, Scope, Value, evaluate};
use serde_json::json;
use walkdir::WalkDir;

/// Runs every `tests/cases/*.cases` file.
///
/// Each non-blank line not starting with `#` reads
/// `<expression> => <expected>` and may end with `;; alias: <alias>`.
/// `<expected>` is one of `null`, `bool <b>`, `number <n>`, `string <text>`,
/// `parse error` or `division by zero`.
#[test]
fn case_files_pass() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "cases"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (number, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            count += 1;
            if let Err(message) = run_case(line) {
                panic!("{}:{}: {line}\n{message}", path.display(), number + 1);
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn scope() -> Scope {
    Scope::new().with_variable("x", "5")
                .with_variable("empty", "")
                .with_variable("env", json!({ "mode": "production", "region": "eu-west", "replicas": 3 }))
                .with_variable("hosts", json!(["alpha", "beta"]))
                .with_variable("debug", json!(false))
                .with_callback("isEnabled", || true)
                .with_callback("isDisabled", || false)
                .with_callback("port", || 8080)
                .with_callback("owner", || "ops")
}

fn run_case(line: &str) -> Result<(), String> {
    let (case, alias) = match line.split_once(";;") {
        Some((case, alias)) => {
            let alias = alias.trim()
                             .strip_prefix("alias:")
                             .ok_or("alias annotation must start with 'alias:'")?;
            (case, Some(alias.trim()))
        },
        None => (line, None),
    };
    let (source, expected) = case.rsplit_once("=>").ok_or("missing '=>'")?;
    let (source, expected) = (source.trim(), expected.trim());

    let result = evaluate(source, &scope());

    match (expected, &result) {
        ("parse error", Err(Error::Parse(_)))
        | ("division by zero", Err(Error::Runtime(RuntimeError::DivisionByZero { .. }))) => {
            return Ok(());
        },
        ("parse error" | "division by zero", _) => {
            return Err(format!("expected {expected}, got {result:?}"));
        },
        _ => {},
    }

    let outcome = result.map_err(|e| format!("unexpected error: {e}"))?;
    let wanted = expected_value(expected)?;
    if outcome.value != wanted {
        return Err(format!("expected {wanted:?}, got {:?}", outcome.value));
    }
    if let Some(alias) = alias
       && outcome.alias != alias
    {
        return Err(format!("expected alias {alias:?}, got {:?}", outcome.alias));
    }
    Ok(())
}

fn expected_value(expected: &str) -> Result<Value, String> {
    let (kind, payload) = expected.split_once(' ').unwrap_or((expected, ""));
    match kind {
        "null" => Ok(Value::Null),
        "bool" => payload.parse().map(Value::Bool).map_err(|e| format!("bad bool: {e}")),
        "number" => payload.parse().map(Value::Number).map_err(|e| format!("bad number: {e}")),
        "string" => Ok(Value::from(payload)),
        _ => Err(format!("unknown expectation '{expected}'")),
    }
}
