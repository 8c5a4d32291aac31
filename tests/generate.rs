use yaml2go::{generate_declarations, generate_go_struct, GenerateError, GenerateOptions};

fn go(src: &str, name: &str) -> String {
    generate_go_struct(src, name, &GenerateOptions::default()).unwrap()
}

fn declaration_names(out: &str) -> Vec<&str> {
    out.lines()
        .filter_map(|l| l.strip_prefix("type "))
        .filter_map(|l| l.strip_suffix(" struct {"))
        .collect()
}

#[test]
fn nested_mapping_becomes_second_declaration() {
    let out = go("server:\n  host: \"x\"\n  port: 80\n", "Config");
    insta::assert_snapshot!(out, @r#"
type Config struct {
	Server ConfigServer `yaml:"server"`
}

type ConfigServer struct {
	Host string `yaml:"host"`
	Port int `yaml:"port"`
}
"#);
}

#[test]
fn flow_style_input_gives_the_same_result() {
    let block = go("server:\n  host: \"x\"\n  port: 80\n", "Config");
    let flow = go("server: {host: \"x\", port: 80}\n", "Config");
    assert_eq!(block, flow);
    assert_eq!(declaration_names(&flow), vec!["Config", "ConfigServer"]);
}

#[test]
fn list_of_mappings_uses_first_element() {
    let out = go("items:\n  - id: 1\n  - id: 2\n    extra: true\n", "Root");
    insta::assert_snapshot!(out, @r#"
type Root struct {
	Items []RootItems `yaml:"items"`
}

type RootItems struct {
	Id int `yaml:"id"`
}
"#);
}

#[test]
fn field_order_ignores_document_order() {
    let a = go("zeta: 1\nalpha: x\nMid: true\nbeta: [1]\n", "Root");
    let b = go("beta: [1]\nMid: true\nzeta: 1\nalpha: x\n", "Root");
    let c = go("alpha: x\nzeta: 1\nbeta: [1]\nMid: true\n", "Root");
    assert_eq!(a, b);
    assert_eq!(a, c);
    let fields: Vec<_> = a.lines().skip(1).take(4).map(|l| l.trim().split(' ').next().unwrap()).collect();
    assert_eq!(fields, vec!["Mid", "Alpha", "Beta", "Zeta"]);
}

#[test]
fn sequence_type_comes_from_first_element() {
    let out = go("values: [1, \"two\", 3.0]\n", "Root");
    assert!(out.contains("\tValues []int `yaml:\"values\"`\n"), "{out}");
}

#[test]
fn empty_mapping_root() {
    assert_eq!(go("{}\n", "Empty"), "type Empty struct {\n}\n\n");
}

#[test]
fn comments_are_trimmed_and_only_present_when_given() {
    let out = go("port: 80   #   the port   \nhost: x\n", "Root");
    assert!(out.contains("\tPort int `yaml:\"port\"` // #   the port\n"), "{out}");
    assert!(out.contains("\tHost string `yaml:\"host\"`\n"), "{out}");
}

#[test]
fn quoted_values_keep_their_comments() {
    let out = go(
        "single: 'x' #quoted\ndouble: \"a#b\" # dq\nescaped: 'it''s' # sq\nslash: \"a\\\"b\" # bs\nbare: \"no comment\"\n",
        "R",
    );
    assert!(out.contains("\tSingle string `yaml:\"single\"` // #quoted\n"), "{out}");
    assert!(out.contains("\tDouble string `yaml:\"double\"` // # dq\n"), "{out}");
    assert!(out.contains("\tEscaped string `yaml:\"escaped\"` // # sq\n"), "{out}");
    assert!(out.contains("\tSlash string `yaml:\"slash\"` // # bs\n"), "{out}");
    assert!(out.contains("\tBare string `yaml:\"bare\"`\n"), "{out}");
}

#[test]
fn json_tags_on_request() {
    let options = GenerateOptions { json_tag: true, ..Default::default() };
    let out = generate_go_struct("user_name: bob\n", "User", &options).unwrap();
    assert_eq!(
        out,
        "type User struct {\n\tUserName string `yaml:\"user_name\" json:\"user_name\"`\n}\n\n"
    );
}

#[test]
fn indent_option_prefixes_lines() {
    let options = GenerateOptions { indent: "\t".into(), ..Default::default() };
    let out = generate_go_struct("a: 1\n", "Root", &options).unwrap();
    assert_eq!(out, "\ttype Root struct {\n\t\tA int `yaml:\"a\"`\n\t}\n\n");
}

#[test]
fn non_mapping_documents_are_format_errors() {
    for src in ["just a scalar\n", "- a\n- b\n", "", "# only a comment\n", "42\n"] {
        let err = generate_go_struct(src, "Root", &GenerateOptions::default()).unwrap_err();
        assert!(err.is_format(), "{src:?}: {err:?}");
    }
}

#[test]
fn malformed_yaml_is_a_parse_error() {
    let err = generate_go_struct("key: [unclosed\n", "Root", &GenerateOptions::default()).unwrap_err();
    assert!(matches!(err, GenerateError::Parse { .. }), "{err:?}");
}

#[test]
fn declarations_are_exposed_before_rendering() {
    let decls = generate_declarations(
        "a:\n  b:\n    c: 1\nd: [{e: 1}]\n",
        "R",
        &GenerateOptions::default(),
    )
    .unwrap();
    let names: Vec<_> = decls.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(names, vec!["R", "RA", "RAB", "RD"]);
}

#[test]
fn golden_samples() {
    let samples = [
        ("Config", include_str!("../samples/config.yaml"), include_str!("../samples/config.go")),
        ("Compose", include_str!("../samples/compose.yaml"), include_str!("../samples/compose.go")),
    ];
    for (name, yaml, expected) in samples {
        assert_eq!(go(yaml, name), expected, "sample {name}");
    }
}
