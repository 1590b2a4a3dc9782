//! Filesystem path rules.
//!
//! Existence and kind checks stat the filesystem at validation time.

use std::fs;
use std::path::Path;

use crate::codes;
use crate::foundation::Error;
use crate::message::templates;

crate::rule! {
    /// Validates that a path exists.
    pub PathExists for str;
    check(input) { fs::metadata(input).is_ok() }
    fail(input) {
        Error::new(codes::IS_PATH_EXISTS, templates::IS_PATH_EXISTS)
            .with_param("value", input)
    }
    fn path_exists();
}

crate::rule! {
    /// Validates that a path does not exist.
    pub PathNotExists for str;
    check(input) { fs::metadata(input).is_err() }
    fail(input) {
        Error::new(codes::IS_PATH_NOT_EXISTS, templates::IS_PATH_NOT_EXISTS)
            .with_param("value", input)
    }
    fn path_not_exists();
}

crate::rule! {
    /// Validates that a path is an existing regular file.
    pub PathFile for str;
    check(input) { fs::metadata(input).is_ok_and(|meta| meta.is_file()) }
    fail(input) {
        Error::new(codes::IS_PATH_FILE, templates::IS_PATH_FILE)
            .with_param("value", input)
    }
    fn path_file();
}

crate::rule! {
    /// Validates that a path is an existing directory.
    pub PathDir for str;
    check(input) { fs::metadata(input).is_ok_and(|meta| meta.is_dir()) }
    fail(input) {
        Error::new(codes::IS_PATH_DIR, templates::IS_PATH_DIR)
            .with_param("value", input)
    }
    fn path_dir();
}

crate::rule! {
    /// Validates that a path is absolute.
    pub PathAbsolute for str;
    check(input) { Path::new(input).is_absolute() }
    fail(input) {
        Error::new(codes::IS_PATH_ABSOLUTE, templates::IS_PATH_ABSOLUTE)
            .with_param("value", input)
    }
    fn path_absolute();
}

crate::rule! {
    /// Validates that a path is relative.
    pub PathRelative for str;
    check(input) { Path::new(input).is_relative() }
    fail(input) {
        Error::new(codes::IS_PATH_RELATIVE, templates::IS_PATH_RELATIVE)
            .with_param("value", input)
    }
    fn path_relative();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_path_exists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().to_str().unwrap();
        assert!(path_exists().validate(path).is_ok());
        assert!(path_not_exists().validate(path).is_err());

        let missing = dir.path().join("missing.txt");
        let missing = missing.to_str().unwrap();
        assert!(path_exists().validate(missing).is_err());
        assert!(path_not_exists().validate(missing).is_ok());
    }

    #[test]
    fn test_path_kind() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("data.txt");
        std::fs::write(&file_path, "x").unwrap();
        let file_path = file_path.to_str().unwrap();
        let dir_path = dir.path().to_str().unwrap();

        assert!(path_file().validate(file_path).is_ok());
        assert!(path_file().validate(dir_path).is_err());
        assert!(path_dir().validate(dir_path).is_ok());
        assert!(path_dir().validate(file_path).is_err());
    }

    #[test]
    fn test_path_absolute_relative() {
        assert!(path_absolute().validate("/etc/hosts").is_ok());
        assert!(path_absolute().validate("etc/hosts").is_err());
        assert!(path_relative().validate("etc/hosts").is_ok());
        assert!(path_relative().validate("/etc/hosts").is_err());
    }

    #[test]
    fn test_failure_carries_path_param() {
        let err = path_exists().validate("/definitely/missing/zzz").unwrap_err();
        match err {
            crate::foundation::RuleError::Single(error) => {
                assert_eq!(error.code(), codes::IS_PATH_EXISTS);
                assert_eq!(error.param("value"), Some("/definitely/missing/zzz"));
            }
            crate::foundation::RuleError::Nested(_) => panic!("expected single failure"),
        }
    }
}
