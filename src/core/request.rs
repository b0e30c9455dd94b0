//! Normalized limits requests handed to executors

use crate::core::kind::LimitKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Operation requested by a `limits` sub-command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    List,
    Set,
    Unset,
}

impl Operation {
    /// Sub-command name as typed on the command line
    #[must_use]
    pub const fn command_name(self) -> &'static str {
        match self {
            Self::List => "limits:list",
            Self::Set => "limits:set",
            Self::Unset => "limits:unset",
        }
    }
}

/// The `(app, items, kind)` triple derived from one invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitsRequest {
    pub operation: Operation,
    /// `None` means the executor resolves its default app
    pub app: Option<String>,
    /// Absent for list, which covers every kind
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<LimitKind>,
    /// `<type>=<value>` tokens for set, process types for unset
    pub items: Vec<String>,
}

impl LimitsRequest {
    pub fn list(app: Option<&str>) -> Self {
        Self {
            operation: Operation::List,
            app: app.map(str::to_string),
            kind: None,
            items: Vec::new(),
        }
    }

    pub fn set(app: Option<&str>, limits: &[String], kind: LimitKind) -> Self {
        Self {
            operation: Operation::Set,
            app: app.map(str::to_string),
            kind: Some(kind),
            items: limits.to_vec(),
        }
    }

    pub fn unset(app: Option<&str>, types: &[String], kind: LimitKind) -> Self {
        Self {
            operation: Operation::Unset,
            app: app.map(str::to_string),
            kind: Some(kind),
            items: types.to_vec(),
        }
    }

    /// Argument list used when forwarding to an external executor program
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![self.operation.command_name().to_string()];
        if let Some(app) = &self.app {
            args.push(format!("--app={app}"));
        }
        if let Some(kind) = self.kind {
            args.push(format!("--kind={kind}"));
        }
        args.extend(self.items.iter().cloned());
        args
    }
}

impl fmt::Display for LimitsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} app={}",
            self.operation.command_name(),
            self.app.as_deref().unwrap_or("<default>")
        )?;
        if let Some(kind) = self.kind {
            write!(f, " kind={kind}")?;
        }
        for item in &self.items {
            write!(f, " {item}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_set_args() {
        let request = LimitsRequest::set(
            Some("myapp"),
            &strings(&["web=2G", "db=1G/2G"]),
            LimitKind::Memory,
        );
        assert_eq!(
            request.to_args(),
            strings(&["limits:set", "--app=myapp", "--kind=memory", "web=2G", "db=1G/2G"])
        );
    }

    #[test]
    fn test_list_args_without_app() {
        assert_eq!(LimitsRequest::list(None).to_args(), strings(&["limits:list"]));
    }

    #[test]
    fn test_display() {
        let request = LimitsRequest::unset(None, &strings(&["web"]), LimitKind::Cpu);
        assert_eq!(request.to_string(), "limits:unset app=<default> kind=cpu web");
    }

    #[test]
    fn test_json_shape() {
        let request = LimitsRequest::list(Some("myapp"));
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"operation":"list","app":"myapp","items":[]}"#);
    }
}
