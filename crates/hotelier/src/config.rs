//! Loading the hotel configuration from disk.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use hotelier_room::HotelConfig;

use crate::HotelierError;

/// Reads a JSON [`HotelConfig`] from `path`.
///
/// Missing fields fall back to their defaults, so `{}` is the standard
/// three-room hotel.
pub fn load_config(path: &Path) -> Result<HotelConfig, HotelierError> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        HotelierError::Config(format!("cannot read {}: {e}", path.display()))
    })?;
    let config: HotelConfig = serde_json::from_str(&text).map_err(|e| {
        HotelierError::Config(format!("cannot parse {}: {e}", path.display()))
    })?;

    tracing::debug!(
        path = %path.display(),
        rooms = config.rooms.len(),
        "configuration loaded"
    );
    Ok(config)
}

/// Usage line reported when the command line doesn't fit.
pub const USAGE: &str = "usage: hotelier [CONFIG.json]";

/// Resolves the configuration from command-line arguments, excluding the
/// program name.
///
/// No argument is the default hotel, one argument is a config file path,
/// and anything more is a usage error.
pub fn config_from_args<I>(args: I) -> Result<HotelConfig, HotelierError>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    match (args.next(), args.next()) {
        (None, _) => Ok(HotelConfig::default()),
        (Some(path), None) => load_config(&PathBuf::from(path)),
        (Some(_), Some(_)) => Err(HotelierError::Config(USAGE.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Writes `contents` to a file unique to this test and returns its path.
    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir()
            .join(format!("hotelier-{}-{name}.json", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_config_reads_rooms() {
        let path = write_temp(
            "rooms",
            r#"{"name": "Seaside Inn", "rooms": [{"number": 12, "category": "Cabin"}]}"#,
        );
        let config = load_config(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.name, "Seaside Inn");
        assert_eq!(config.rooms.len(), 1);
        assert_eq!(config.rooms[0].category, "Cabin");
    }

    #[test]
    fn test_load_config_empty_object_is_default() {
        let path = write_temp("empty", "{}");
        let config = load_config(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config, HotelConfig::default());
    }

    #[test]
    fn test_load_config_missing_file() {
        let path = std::env::temp_dir().join("hotelier-does-not-exist.json");
        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, HotelierError::Config(_)));
        assert!(err.to_string().contains("cannot read"));
    }

    #[test]
    fn test_load_config_malformed_json() {
        let path = write_temp("malformed", "{ rooms: ");
        let err = load_config(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(err, HotelierError::Config(_)));
        assert!(err.to_string().contains("cannot parse"));
    }

    #[test]
    fn test_config_from_args_none_is_default() {
        let config = config_from_args(Vec::<OsString>::new()).unwrap();
        assert_eq!(config, HotelConfig::default());
    }

    #[test]
    fn test_config_from_args_single_path_loads_file() {
        let path = write_temp("args", r#"{"name": "Harbor Hotel"}"#);
        let config = config_from_args(vec![path.clone().into_os_string()]).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.name, "Harbor Hotel");
    }

    #[test]
    fn test_config_from_args_extra_argument_is_usage_error() {
        let args = vec![OsString::from("a.json"), OsString::from("b.json")];
        let err = config_from_args(args).unwrap_err();
        assert!(matches!(err, HotelierError::Config(_)));
        assert_eq!(err.to_string(), format!("invalid configuration: {USAGE}"));
    }
}
