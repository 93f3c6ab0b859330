use crate::error::{Error, Result};
use crate::utils::{host_arch, host_os};
use std::collections::HashMap;

/// Named variables available to `{{.name}}` references in templates
#[derive(Debug, Default, Clone)]
pub struct VariableSet {
    /// Built-ins overlaid with user bindings
    vars: HashMap<String, String>,
}

impl VariableSet {
    /// Create a variable set from the host built-ins and user bindings
    ///
    /// Resolution order (highest to lowest priority):
    /// 1. User bindings (--var name=value)
    /// 2. Built-in variables (os, arch)
    pub fn new(bindings: &[(String, String)]) -> Result<Self> {
        Ok(Self::with_builtins(&host_os(), &host_arch()?, bindings))
    }

    /// Create a variable set with explicit values for the built-ins
    pub fn with_builtins(os: &str, arch: &str, bindings: &[(String, String)]) -> Self {
        let mut vars = HashMap::new();
        vars.insert("os".to_string(), os.to_string());
        vars.insert("arch".to_string(), arch.to_string());

        for (key, value) in bindings {
            vars.insert(key.clone(), value.clone());
        }

        Self { vars }
    }

    /// Substitute `{{.name}}` references in a template
    ///
    /// Whitespace is allowed inside the braces (`{{ .name }}`). Text outside
    /// of references is copied unchanged.
    pub fn substitute(&self, template: &str) -> Result<String> {
        let mut result = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            result.push_str(&rest[..start]);
            let after_open = &rest[start + 2..];

            let end = after_open
                .find("}}")
                .ok_or_else(|| Error::template(template, "unclosed action"))?;
            let action = after_open[..end].trim();

            let name = action.strip_prefix('.').ok_or_else(|| {
                Error::template(template, format!("expected '.name' but found '{action}'"))
            })?;
            if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(Error::template(
                    template,
                    format!("invalid variable name '{name}'"),
                ));
            }

            let value = self
                .vars
                .get(name)
                .ok_or_else(|| Error::template(template, format!("undefined variable '{name}'")))?;
            result.push_str(value);

            rest = &after_open[end + 2..];
        }

        result.push_str(rest);
        Ok(result)
    }

}

/// Parse a name=value binding
pub fn parse_key_value(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected format 'name=value', got: {s}")),
    }
}
