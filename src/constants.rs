//! Constants used throughout pkgseed

/// Configuration file names in order of preference
pub const CONFIG_FILENAMES: &[&str] = &["pkgseed.json", "pkgseed.yaml", "pkgseed.yml"];

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Name of the generated manifest
pub const MANIFEST_FILENAME: &str = "package.json";

/// Fixed values written into every generated manifest
pub mod manifest {
    pub const INITIAL_VERSION: &str = "1.0.0-1";
    pub const LICENSE: &str = "MIT";
    pub const TEST_SCRIPT: &str = "echo \"Error: no test specified\" && exit 1";

    pub const SOURCE_DIR: &str = "lib";
    pub const BUILD_DIR: &str = "dist";
    pub const SOURCE_MAIN: &str = "index.js";
    pub const BUILD_MAIN: &str = "dist/index.js";

    pub const BUILD_SCRIPT_KEY: &str = "build";
    pub const BUILD_SCRIPT: &str = "babel lib -d dist";

    /// Prefix turning a plugin id into its npm package name
    pub const PLUGIN_PACKAGE_PREFIX: &str = "babel-plugin-transform-";
    pub const PLUGIN_VERSION_RANGE: &str = "^6.4";

    pub const DEFAULT_AUTHOR_NAME: &str = "Sean Genabe";
    pub const DEFAULT_AUTHOR_EMAIL: &str = "seangenabe@outlook.com";
    pub const DEFAULT_GITHUB_OWNER: &str = "seangenabe";
}

/// Destination paths of the planned template outputs
pub mod paths {
    pub const CI_CONFIG: &str = ".travis.yml";
    pub const README: &str = "readme.md";
    pub const LICENSE: &str = "license.md";
    pub const LIBRARY_SOURCE: &str = "lib/index.js";
    pub const LIBRARY_PLAIN: &str = "index.js";
    pub const GIT_ATTRIBUTES: &str = ".gitattributes";
    pub const CLI_BIN: &str = "bin/cli";
    pub const GIT_IGNORE: &str = ".gitignore";
    pub const NPM_IGNORE: &str = ".npmignore";
}

/// Default dependency installation command
pub const DEFAULT_INSTALL_COMMAND: &[&str] = &["npm", "install"];

/// Validation messages
pub mod validation {
    pub const INVALID_ANSWER: &str = "Invalid answer";
    pub const DEFAULT_CONDITION: &str = "true";
    pub const NAME_PATTERN: &str = r"^(@[a-z0-9~-][a-z0-9._~-]*/)?[a-z0-9~-][a-z0-9._~-]*$";
}

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
