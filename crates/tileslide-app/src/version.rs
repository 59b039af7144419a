//! Build/version helpers shown in the UI and startup logs.

/// Returns a combined version string: `pkg_version (git_hash)`.
///
/// If git metadata is unavailable, the hash is reported as `unknown`.
#[must_use]
pub fn build_version() -> String {
    let pkg_version = env!("CARGO_PKG_VERSION");
    let git_hash = option_env!("VERGEN_GIT_SHA").unwrap_or("unknown");

    format!("{pkg_version} ({git_hash})")
}

#[cfg(test)]
mod tests {
    use super::build_version;

    #[test]
    fn version_starts_with_package_version() {
        let version = build_version();
        assert!(version.starts_with(env!("CARGO_PKG_VERSION")));
        assert!(version.ends_with(')'));
    }
}
