use httpget::target::{RequestTarget, TargetError};

#[test]
fn test_accepts_valid_target() {
    let target = RequestTarget::new("example.com", "8080", "/files/a.txt").unwrap();

    assert_eq!(target.host, "example.com");
    assert_eq!(target.port, 8080);
    assert_eq!(target.path, "/files/a.txt");
    assert_eq!(target.host_header(), "example.com:8080");
}

#[test]
fn test_rejects_non_numeric_port() {
    let result = RequestTarget::new("example.com", "http", "/");
    assert!(matches!(result, Err(TargetError::InvalidPort(_))));
}

#[test]
fn test_rejects_port_zero() {
    let result = RequestTarget::new("example.com", "0", "/");
    assert!(matches!(result, Err(TargetError::InvalidPort(_))));
}

#[test]
fn test_rejects_negative_port() {
    let result = RequestTarget::new("example.com", "-1", "/");
    assert!(matches!(result, Err(TargetError::InvalidPort(_))));
}

#[test]
fn test_rejects_port_above_range() {
    let result = RequestTarget::new("example.com", "65536", "/");
    assert!(matches!(result, Err(TargetError::InvalidPort(_))));
}

#[test]
fn test_accepts_maximum_port() {
    let target = RequestTarget::new("example.com", "65535", "/").unwrap();
    assert_eq!(target.port, 65535);
}

#[test]
fn test_rejects_relative_path() {
    let result = RequestTarget::new("example.com", "80", "index.html");
    assert!(matches!(result, Err(TargetError::RelativePath(_))));
}

#[test]
fn test_rejects_empty_path() {
    let result = RequestTarget::new("example.com", "80", "");
    assert!(matches!(result, Err(TargetError::RelativePath(_))));
}

#[test]
fn test_filename_for_root_path() {
    let target = RequestTarget::new("example.com", "80", "/").unwrap();
    assert_eq!(target.output_filename(), "index.html");
}

#[test]
fn test_filename_for_trailing_slash() {
    let target = RequestTarget::new("example.com", "80", "/a/b/").unwrap();
    assert_eq!(target.output_filename(), "index.html");
}

#[test]
fn test_filename_for_nested_file() {
    let target = RequestTarget::new("example.com", "80", "/a/b/c.txt").unwrap();
    assert_eq!(target.output_filename(), "c.txt");
}

#[test]
fn test_filename_for_top_level_file() {
    let target = RequestTarget::new("example.com", "80", "/file").unwrap();
    assert_eq!(target.output_filename(), "file");
}
