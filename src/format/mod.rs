use clap::ValueEnum;

/// Output format for the emitted assignments
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// `export NAME=$'value'`, ready for `eval`
    #[default]
    Exports,
    /// `NAME="value"`, for .env files
    Dotenv,
}

impl OutputFormat {
    pub fn render(self, name: &str, value: &str) -> String {
        match self {
            OutputFormat::Exports => format!("export {}=$'{}'", name, value),
            OutputFormat::Dotenv => format!("{}=\"{}\"", name, value),
        }
    }
}

/// Derive an environment variable name from a parameter's full name.
///
/// The path prefix is removed, surrounding slashes are trimmed, `/` and `-`
/// become `_` and the result is uppercased. A name outside the prefix is
/// used whole.
pub fn env_name(prefix: &str, full_name: &str) -> String {
    let suffix = full_name.strip_prefix(prefix).unwrap_or(full_name);

    suffix
        .trim_matches('/')
        .replace(['/', '-'], "_")
        .to_uppercase()
}

/// Keep multi-line values on a single line
pub fn escape_value(value: &str) -> String {
    value.replace('\n', "\\n")
}

/// Build one output line, or `None` if no variable name can be derived.
pub fn format_line(
    prefix: &str,
    full_name: &str,
    value: &str,
    format: OutputFormat,
) -> Option<String> {
    let name = env_name(prefix, full_name);
    if name.is_empty() {
        return None;
    }

    Some(format.render(&name, &escape_value(value)))
}
