//! `${VAR}` and `${VAR:-default}` expansion for configuration strings.

use std::env::{self, VarError};

use crate::ConfigError;

/// Expand environment variable references in `value`.
///
/// Only the braced forms are recognized; a bare `$VAR` is left as is, even
/// next to a braced reference. An unset variable without a default is an
/// error naming `field`.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    let mut expanded = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        expanded.push_str(&rest[..start]);
        let tail = &rest[start..];
        let Some(end) = tail.find('}') else {
            // Unterminated reference stays literal.
            expanded.push_str(tail);
            return Ok(expanded);
        };
        let reference = &tail[..=end];
        let resolved = shellexpand::env_with_context(reference, lookup).map_err(|e| {
            ConfigError::EnvVar {
                field: field.to_owned(),
                message: format!("${{{}}} {}", e.var_name, e.cause),
            }
        })?;
        expanded.push_str(&resolved);
        rest = &tail[end + 1..];
    }

    expanded.push_str(rest);
    Ok(expanded)
}

/// Expand every entry of a list field, reporting errors as `field[i]`.
pub(crate) fn expand_env_list(values: &[String], field: &str) -> Result<Vec<String>, ConfigError> {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| expand_env(value, &format!("{field}[{i}]")))
        .collect()
}

fn lookup(name: &str) -> Result<Option<String>, &'static str> {
    match env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Err("not set"),
        Err(VarError::NotUnicode(_)) => Err("is not valid unicode"),
    }
}
