use bridge_fs::NormalizedPath;
use rstest::rstest;

#[rstest]
#[case("foo/bar/baz", "foo/bar/baz")]
#[case("foo\\bar\\baz", "foo/bar/baz")]
#[case("foo/bar\\baz", "foo/bar/baz")]
#[case("foo//bar/./baz/", "foo/bar/baz")]
#[case("/abs/path", "/abs/path")]
fn test_normalize(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(NormalizedPath::new(input).as_str(), expected);
}

#[test]
fn test_join_resolves_dots() {
    let base = NormalizedPath::new("/a/b");

    assert_eq!(base.join("c").as_str(), "/a/b/c");
    assert_eq!(base.join("./c").as_str(), "/a/b/c");
    assert_eq!(base.join("../c").as_str(), "/a/c");
    assert_eq!(base.join("../../c").as_str(), "/c");
}

#[rstest]
#[case("../out", "../out")]
#[case("../../ext/", "../../ext")]
#[case("a/../../b", "../b")]
#[case("a/b/../../..", "..")]
#[case("./../scripts", "../scripts")]
fn test_relative_root_keeps_parent_segments(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(NormalizedPath::new(input).as_str(), expected);
}

#[test]
fn test_join_onto_relative_parent() {
    let root = NormalizedPath::new("../out");
    assert_eq!(root.join("sub/a.m").as_str(), "../out/sub/a.m");
}

#[test]
fn test_file_name_and_extension() {
    let path = NormalizedPath::new("/ext/matlab_engine.jar");
    assert_eq!(path.file_name(), Some("matlab_engine.jar"));
    assert_eq!(path.extension(), Some("jar"));

    let link = NormalizedPath::new("/ext/matlab_engine");
    assert_eq!(link.extension(), None);

    let hidden = NormalizedPath::new("/home/.prefs");
    assert_eq!(hidden.extension(), None);
}

#[test]
fn test_parent() {
    let path = NormalizedPath::new("scripts/sub/dir/name.m");
    assert_eq!(path.parent().unwrap().as_str(), "scripts/sub/dir");
    assert!(NormalizedPath::new("name.m").parent().is_none());
}

#[test]
fn test_network_prefix_preserved() {
    let path = NormalizedPath::new("\\\\server\\share\\engine.jar");
    assert_eq!(path.as_str(), "//server/share/engine.jar");
}
