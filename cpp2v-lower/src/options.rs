//! Translation options
//!
//! Settings for one translation-unit job, built by the driver from the
//! command line.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationOptions {
    /// Walk implicit instantiations and explicit specializations
    pub elaborate: bool,
    /// Walk template patterns
    pub templates: bool,
    /// Log every module insertion at trace level
    pub trace_module_builder: bool,
}

impl Default for TranslationOptions {
    fn default() -> Self {
        Self {
            elaborate: true,
            templates: false,
            trace_module_builder: false,
        }
    }
}

impl TranslationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_elaborate(mut self, elaborate: bool) -> Self {
        self.elaborate = elaborate;
        self
    }

    pub fn with_templates(mut self, templates: bool) -> Self {
        self.templates = templates;
        self
    }

    pub fn with_trace_module_builder(mut self, trace: bool) -> Self {
        self.trace_module_builder = trace;
        self
    }
}
