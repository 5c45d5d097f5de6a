//! Polylang adapter (free and pro editions).

use std::sync::Arc;

use crate::domain::localization::{IntegrationClass, LocalizationIntegration};
use crate::ports::HostEnvironment;

pub struct Polylang {
    host: Arc<dyn HostEnvironment>,
}

impl Polylang {
    pub const IDENTIFIER: &'static str = "Polylang";

    pub fn new(host: Arc<dyn HostEnvironment>) -> Self {
        Self { host }
    }

    pub fn class() -> IntegrationClass {
        IntegrationClass::new(Self::IDENTIFIER, |host| Arc::new(Self::new(host)))
    }
}

impl LocalizationIntegration for Polylang {
    fn plugin_name(&self) -> &'static str {
        "Polylang"
    }

    fn plugin_files(&self) -> &'static [&'static str] {
        &["polylang-pro/polylang.php", "polylang/polylang.php"]
    }

    fn host(&self) -> &dyn HostEnvironment {
        self.host.as_ref()
    }
}
