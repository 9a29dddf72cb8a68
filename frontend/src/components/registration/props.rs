use common::config::ApiConfig;
use yew::prelude::*;

use crate::config::api_config;

/// Properties for `RegistrationFormComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct RegistrationProps {
    /// Where the form is posted. Defaults to the build-time API base, which
    /// lets a page or a test point the form at a mock server.
    #[prop_or_else(api_config)]
    pub api: ApiConfig,
}
