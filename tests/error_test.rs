use std::io;

use skeletons::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::NotADirectoryError { path: "site".to_string() };
    assert_eq!(err.to_string(), "site already exists but not a directory");

    let err = Error::CollisionError { path: "site/content".to_string() };
    assert_eq!(err.to_string(), "site/content already exists");

    let err = Error::SerializationError {
        format: "org".to_string(),
        reason: "unsupported format".to_string(),
    };
    assert_eq!(err.to_string(), "Failed to serialize org: unsupported format.");
}
