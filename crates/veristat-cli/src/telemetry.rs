use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt::Display;

use tracing::error;

/// Explicit telemetry context for one reporting invocation.
///
/// Replaces a process-global error-reporting scope: the CLI constructs it,
/// records invocation facts as they become known, and forwards failures as
/// structured events. The core pipeline never depends on it.
#[derive(Debug, Default)]
pub struct Telemetry {
    scope: RefCell<BTreeMap<&'static str, String>>,
}

impl Telemetry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, key: &'static str, value: impl Into<String>) {
        self.scope.borrow_mut().insert(key, value.into());
    }

    pub fn capture_error(&self, err: &dyn Display) {
        let scope = self.scope.borrow();
        error!(scope = ?*scope, error = %err, "reporting failure captured");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorded_facts_accumulate_in_scope() {
        let telemetry = Telemetry::new();
        telemetry.record("host", "app.veristat.io");
        telemetry.record("workDir", "/work");
        telemetry.record("host", "other.veristat.io");

        let scope = telemetry.scope.borrow();
        assert_eq!(scope.len(), 2);
        assert_eq!(scope.get("host").map(String::as_str), Some("other.veristat.io"));
    }
}
