//! Version command

use crate::cli::VersionArgs;
use crate::output;
use crate::version::VersionInfo;
use anyhow::Result;

pub fn run(args: VersionArgs) -> Result<()> {
    let info = VersionInfo::current();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("{}", info);
        for (label, value) in info.details() {
            output::kv(label, value);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_version_is_valid_semver() {
        let info = VersionInfo::current();
        assert!(
            semver::Version::parse(&info.version).is_ok(),
            "version should be valid semver, got: {}",
            info.version
        );
    }

    #[test]
    fn test_display_with_commit() {
        let info = VersionInfo {
            version: "1.2.3".to_string(),
            commit: Some("abc1234".to_string()),
            build_date: Some("2026-01-01".to_string()),
            target: None,
        };
        assert_eq!(info.to_string(), "kbump 1.2.3 (abc1234)");
        assert_eq!(info.details(), vec![("Commit", "abc1234"), ("Build date", "2026-01-01")]);
    }

    #[test]
    fn test_json_omits_unknown_fields() {
        let info = VersionInfo {
            version: "0.1.0".to_string(),
            commit: None,
            build_date: None,
            target: None,
        };
        let json = serde_json::to_string(&info).unwrap();
        assert_eq!(json, r#"{"version":"0.1.0"}"#);
        assert_eq!(info.to_string(), "kbump 0.1.0");
    }
}
