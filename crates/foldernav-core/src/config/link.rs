//! Share link construction configuration.

use serde::{Deserialize, Serialize};

/// Settings for building folder links into the host application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkConfig {
    /// Value of the `selectedItem` query parameter naming the host page.
    #[serde(default = "default_page_selector")]
    pub page_selector: String,
    /// Hash route of the test cases page.
    #[serde(default = "default_test_cases_route")]
    pub test_cases_route: String,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            page_selector: default_page_selector(),
            test_cases_route: default_test_cases_route(),
        }
    }
}

fn default_page_selector() -> String {
    "com.atlassian.plugins.atlassian-connect-plugin:com.kanoah.test-manager__main-project-page"
        .to_string()
}

fn default_test_cases_route() -> String {
    "#!/v2/testCases".to_string()
}
