// tests/output_tests.rs

use rsql_filter::ast::{ComparisonOp, Node};
use rsql_filter::output::{to_json, to_json_string, to_rsql, value_to_json};
use rsql_filter::{Value, parse};
use serde_json::json;

// ============================================================================
// Canonical RSQL
// ============================================================================

#[test]
fn test_rsql_spelling() {
    let test_cases = vec![
        ("a==1", "a==1"),
        ("a=eq=1", "a==1"),
        ("a=ne=x", "a!=x"),
        ("a<1", "a=lt=1"),
        ("a<=1", "a=le=1"),
        ("a>1.5", "a=gt=1.5"),
        ("a>=-2", "a=ge=-2"),
        ("a=in=( x , y )", "a=in=(x,y)"),
        ("a=out=(1,2)", "a=out=(1,2)"),
        ("a==true", "a==true"),
        ("a!=null", "a!=null"),
        ("a==John Smith", "a==John Smith"),
    ];

    for (input, expected) in test_cases {
        let node = parse(input).unwrap();
        assert_eq!(to_rsql(&node), expected, "Failed for input: {}", input);
    }
}

#[test]
fn test_rsql_parenthesizes_or_inside_and() {
    let node = parse("(a==1,b==2);c==3").unwrap();
    assert_eq!(to_rsql(&node), "(a==1,b==2);c==3");

    let node = parse("a==1,b==2;c==3").unwrap();
    assert_eq!(to_rsql(&node), "a==1,b==2;c==3");

    let node = parse("((a==1))").unwrap();
    assert_eq!(to_rsql(&node), "a==1");
}

#[test]
fn test_rsql_float_keeps_float_type() {
    let node = Node::compare("x", ComparisonOp::Eq, 1.0);
    let printed = to_rsql(&node);
    assert_eq!(printed, "x==1.0");
    assert_eq!(parse(&printed).unwrap(), node);

    let node = Node::compare("x", ComparisonOp::Eq, 1e10);
    assert_eq!(parse(&to_rsql(&node)).unwrap(), node);
}

#[test]
fn test_rsql_never_prints_infinity() {
    assert!(parse("x==1e400").is_err());

    let node = parse("x==1.7976931348623157e308").unwrap();
    let printed = to_rsql(&node);
    assert!(!printed.contains("inf"), "Printed: {}", printed);
    assert_eq!(parse(&printed).unwrap(), node);
}

#[test]
fn test_reparse_is_stable() {
    let inputs = vec![
        "name==John",
        "age=gt=21;age=lt=65",
        "city=in=(NY,LA,SF)",
        "(a==1,b==2);c==3",
        "a==1,b==2;c==3",
        "a==1;(b!=2,c==3)",
        "((a==1,b==2);(c==3,d==4)),e=out=(1,2.5,x)",
        "v==-1.0;w==1e10;x==abc-1;y==2024-01-01;z==null",
        "a < 1 ; b >= 2.5 , c =ne= x",
        "big==1e308;small==-1.7976931348623157e308;tiny==5e-324",
    ];

    for input in inputs {
        let node = parse(input).unwrap();
        let reparsed = parse(&to_rsql(&node)).unwrap();
        assert_eq!(reparsed, node, "Failed for input: {}", input);
    }
}

// ============================================================================
// JSON
// ============================================================================

#[test]
fn test_json_constraint() {
    let node = parse("age=gt=21").unwrap();
    assert_eq!(
        to_json(&node),
        json!({"field": "age", "operator": "gt", "value": 21})
    );
}

#[test]
fn test_json_list() {
    let node = parse("tag=out=(x,2,2.5)").unwrap();
    assert_eq!(
        to_json(&node),
        json!({"field": "tag", "operator": "out", "value": ["x", 2, 2.5]})
    );
}

#[test]
fn test_json_nested() {
    let node = parse("(a==1,b==true);c!=null").unwrap();
    assert_eq!(
        to_json(&node),
        json!({
            "operator": "and",
            "nodes": [
                {
                    "operator": "or",
                    "nodes": [
                        {"field": "a", "operator": "eq", "value": 1},
                        {"field": "b", "operator": "eq", "value": true},
                    ]
                },
                {"field": "c", "operator": "ne", "value": null},
            ]
        })
    );
}

#[test]
fn test_json_string_pretty() {
    let node = parse("a==1").unwrap();
    assert_eq!(
        to_json_string(&node, false),
        r#"{"field":"a","operator":"eq","value":1}"#
    );
    assert_eq!(
        to_json_string(&node, true),
        "{\n  \"field\": \"a\",\n  \"operator\": \"eq\",\n  \"value\": 1\n}"
    );
}

#[test]
fn test_json_non_finite_float() {
    assert_eq!(value_to_json(&Value::Float(f64::INFINITY)), serde_json::Value::Null);
    assert_eq!(value_to_json(&Value::Float(0.5)), json!(0.5));
}
