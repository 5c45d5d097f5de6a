//! WPML adapter.

use std::sync::Arc;

use crate::domain::localization::{IntegrationClass, LocalizationIntegration};
use crate::ports::HostEnvironment;

pub struct Wpml {
    host: Arc<dyn HostEnvironment>,
}

impl Wpml {
    pub const IDENTIFIER: &'static str = "WPML";

    pub fn new(host: Arc<dyn HostEnvironment>) -> Self {
        Self { host }
    }

    pub fn class() -> IntegrationClass {
        IntegrationClass::new(Self::IDENTIFIER, |host| Arc::new(Self::new(host)))
    }
}

impl LocalizationIntegration for Wpml {
    fn plugin_name(&self) -> &'static str {
        "WPML"
    }

    fn plugin_files(&self) -> &'static [&'static str] {
        &["sitepress-multilingual-cms/sitepress.php"]
    }

    fn host(&self) -> &dyn HostEnvironment {
        self.host.as_ref()
    }
}
