/// Long options that may also be spelled with a single dash
const LEGACY_FLAGS: [&str; 3] = ["recursive", "format", "log-level"];

/// Rewrite Go-style single-dash flags to their double-dash form
///
/// This accepts arguments in either of these formats:
/// - -format dotenv / -format=dotenv: becomes --format ...
/// - -recursive: becomes --recursive
///
/// Everything else, including short flags like -h, is passed through unchanged.
pub fn normalize_legacy_flags<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    args.into_iter()
        .map(|arg| {
            let flag = match arg.strip_prefix('-') {
                Some(rest) if !rest.starts_with('-') => rest,
                _ => return arg,
            };
            let name = flag.split('=').next().unwrap_or(flag);

            if LEGACY_FLAGS.contains(&name) {
                format!("-{}", arg)
            } else {
                arg
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(args: &[&str]) -> Vec<String> {
        normalize_legacy_flags(args.iter().map(|arg| arg.to_string()))
    }

    #[test]
    fn test_normalize_single_dash_flags() {
        let result = normalize(&["aws-env", "-recursive", "-format", "dotenv"]);

        assert_eq!(result, vec!["aws-env", "--recursive", "--format", "dotenv"]);
    }

    #[test]
    fn test_normalize_inline_value() {
        let result = normalize(&["aws-env", "-format=dotenv", "-log-level=debug"]);

        assert_eq!(result, vec!["aws-env", "--format=dotenv", "--log-level=debug"]);
    }

    #[test]
    fn test_normalize_keeps_double_dash_flags() {
        let result = normalize(&["aws-env", "--recursive", "--format", "exports"]);

        assert_eq!(result, vec!["aws-env", "--recursive", "--format", "exports"]);
    }

    #[test]
    fn test_normalize_keeps_unknown_flags() {
        let result = normalize(&["aws-env", "-h", "-V", "-", "-unknown"]);

        assert_eq!(result, vec!["aws-env", "-h", "-V", "-", "-unknown"]);
    }
}
