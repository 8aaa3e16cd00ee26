//! Compile-time embedded templates.
//!
//! Each constant loads a file from the crate's `templates/` directory via
//! [`include_str!`]; a wrong path fails the build. Metadata for each
//! built-in lives next to its text in [`BUILTINS`].

use super::TemplateMeta;

pub const ANDROID_CI: &str = include_str!("../../templates/android-ci.yml.tmpl");
pub const DEBUG_LOG_VIEWER: &str = include_str!("../../templates/debug-log-viewer.kt.tmpl");

/// A built-in template definition.
pub(super) struct Builtin {
    pub id: &'static str,
    pub text: &'static str,
    pub description: &'static str,
    pub default_out: &'static str,
    pub required_config: &'static [&'static str],
}

impl Builtin {
    pub fn meta(&self) -> TemplateMeta {
        TemplateMeta {
            description: self.description.to_string(),
            default_out: Some(self.default_out.to_string()),
            required_config: self.required_config.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// All built-in templates, sorted by id.
pub(super) const BUILTINS: &[Builtin] = &[
    Builtin {
        id: "android-ci",
        text: ANDROID_CI,
        description: "GitHub Actions workflow that builds a debug APK and uploads it",
        default_out: ".github/workflows/android-ci.yml",
        required_config: &["UPLOAD_TOKEN (GitHub repository secret)"],
    },
    Builtin {
        id: "debug-log-viewer",
        text: DEBUG_LOG_VIEWER,
        description: "Compose activity that shows the app's recent logcat output",
        default_out: "app/src/main/java/DebugLogActivity.kt",
        required_config: &[
            "AndroidManifest.xml: declare <activity android:name=\".DebugLogActivity\" />",
            "Gradle: Jetpack Compose and material3 dependencies",
        ],
    },
];
