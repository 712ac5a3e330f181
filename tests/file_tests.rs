//! Integration tests for file loading.

use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};
use yamlfilter::document::node::{YamlNode, YamlValue};
use yamlfilter::file::loader::{load_yaml_file, load_yaml_from_bytes};
use yamlfilter::filter::apply;

#[test]
fn test_load_simple_yaml_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "name: test\n").unwrap();

    let docs = load_yaml_file(temp_file.path()).unwrap();
    assert_eq!(docs.len(), 1);

    match docs[0].value() {
        YamlValue::Mapping(entries) => {
            assert_eq!(entries.len(), 1);
            assert_eq!(entries.get("name"), Some(&YamlNode::string("test")));
        }
        _ => panic!("Expected mapping"),
    }
}

#[test]
fn test_load_multi_document_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "a: 1\n---\na: 2\n---\nb: 3\n").unwrap();

    let docs = load_yaml_file(temp_file.path()).unwrap();
    assert_eq!(docs.len(), 3);

    let values: Vec<YamlNode> = docs.iter().map(|d| apply("'.a'", d).unwrap()).collect();
    assert_eq!(values[0], YamlNode::integer(1));
    assert_eq!(values[1], YamlNode::integer(2));
    assert!(values[2].is_absent());
}

#[test]
fn test_load_json_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, r#"{{"users": [{{"id": 1}}, {{"id": 2}}]}}"#).unwrap();

    let docs = load_yaml_file(temp_file.path()).unwrap();
    assert_eq!(
        apply("'.users[].id'", &docs[0]).unwrap(),
        YamlNode::sequence(vec![YamlNode::integer(1), YamlNode::integer(2)])
    );
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let result = load_yaml_file(dir.path().join("missing.yaml"));
    assert!(result.is_err());
}

#[test]
fn test_load_invalid_yaml() {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "a: [1, 2\n").unwrap();
    assert!(load_yaml_file(temp_file.path()).is_err());
}

// ============================================================================
// Gzip
// ============================================================================

fn gzip(content: &str) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(content.as_bytes()).unwrap();
    encoder.finish().unwrap()
}

#[test]
fn test_load_gzip_file_by_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("robots.yaml.gz");
    fs::write(&path, gzip("robots: [{name: arm}, {name: gripper}]\n")).unwrap();

    let docs = load_yaml_file(&path).unwrap();
    assert_eq!(
        apply("'.robots[].name'", &docs[0]).unwrap(),
        YamlNode::sequence(vec![YamlNode::string("arm"), YamlNode::string("gripper")])
    );
}

#[test]
fn test_load_gzip_bytes_by_magic() {
    let docs = load_yaml_from_bytes(&gzip("a: 1\n---\na: 2\n")).unwrap();
    assert_eq!(docs.len(), 2);
}

#[test]
fn test_corrupt_gzip_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.yaml.gz");
    fs::write(&path, b"not gzip at all").unwrap();
    assert!(load_yaml_file(&path).is_err());
}
