//! Black-box integration tests for the six numbered end-to-end scenarios
//! (spec §8) plus a couple of the invariants/boundaries listed alongside
//! them. These exercise only the two public entry points, the way an
//! external driver would.

use archrule::{compile_to_cypher, compile_to_json, CompileError, TranslateError};

#[test]
fn scenario_1_plain_all_over_container() {
    let out = compile_to_cypher("rule r { all { c in container: true } }").unwrap();
    assert!(out.starts_with("// [RULE]: r\n// [DESCRIPTION]: \n// [PRIORITY]: ERROR\n"));
    assert!(out.contains("MATCH (c:Container) WHERE"));
    assert!(out.ends_with(" RETURN c"));
}

#[test]
fn scenario_2_exist_with_two_identifiers_has_pairwise_inequality() {
    let out =
        compile_to_cypher("rule r { exist { s1, s2 in system: s1.tech == s2.tech } }").unwrap();
    assert!(out.contains(
        "MATCH (s1:SoftwareSystem), (s2:SoftwareSystem) WHERE s1 <> s2 AND  (s1.tech = s2.tech)"
    ));
}

#[test]
fn scenario_3_assignment_binds_a_name_for_later_reference() {
    let out = compile_to_cypher("rule r { x = 5; all { c in container: x == 5 } }").unwrap();
    assert!(out.contains("WITH 5 AS x"));
    // a later reference to `x` must resolve (no UnboundVariable error was raised)
    assert!(out.contains("(x = 5)"));
}

#[test]
fn scenario_4_cross_with_none_checks_empty_intersection() {
    let out = compile_to_cypher(
        r#"rule r { all { c in container: cross(c.tech, ["JS"]) == none } }"#,
    )
    .unwrap();
    assert!(out.contains("[ x IN c.tech WHERE x IN [\"JS\"] ] = []"));
}

#[test]
fn scenario_5_nested_quantifier_uses_exists_and_containment_source() {
    let out = compile_to_cypher(
        r#"rule r { all { s in system: exist { c in s: c.tech in ["Go"] } } }"#,
    )
    .unwrap();
    assert!(out.contains("EXISTS {"));
    assert!(out.contains("(s)-[:CONTAINS*]->(c)"));
    assert!(out.contains("c.tech IN [\"Go\"]"));
}

#[test]
fn scenario_6_except_wraps_inner_quantifier_in_and_not() {
    let out = compile_to_cypher(
        "rule r { all { s in system: true }; except exist { s in system: s.tech in [\"go\"] } }",
    )
    .unwrap();
    assert!(out.contains("MATCH (s:SoftwareSystem) WHERE"));
    assert!(out.contains("NOT (true)"));
    assert!(out.contains("AND NOT ( (s.tech IN [\"go\"]) )"));
}

#[test]
fn boundary_single_identifier_still_emits_where_with_empty_tail() {
    let out = compile_to_cypher("rule r { all { c in container: true } }").unwrap();
    assert!(out.contains("WHERE  NOT (true)"));
}

#[test]
fn boundary_if_without_else_falls_back_to_true() {
    let out = compile_to_cypher(
        r#"rule r { all { s in system: if s.tech == "Go" then false } }"#,
    )
    .unwrap();
    assert!(out.contains("ELSE (true) END"));
}

#[test]
fn boundary_empty_set_literal_is_a_parse_error() {
    let err = compile_to_cypher("rule r { x = [] }").unwrap_err();
    assert!(matches!(err, CompileError::Parse(_)));
}

#[test]
fn boundary_rule_with_no_description_still_emits_the_header_line() {
    let out = compile_to_cypher("rule r { x = 1 }").unwrap();
    assert!(out.starts_with("// [RULE]: r\n// [DESCRIPTION]: \n// [PRIORITY]: ERROR\n"));
}

#[test]
fn unbound_variable_is_reported_with_the_exact_message() {
    let err = compile_to_cypher("rule r { x = y }").unwrap_err();
    match err {
        CompileError::Translate(TranslateError::UnboundVariable(name)) => {
            assert_eq!(name, "y");
        }
        other => panic!("expected UnboundVariable, got {other:?}"),
    }
}

#[test]
fn unknown_function_is_reported_with_the_exact_message() {
    let err = compile_to_cypher("rule r { all { c in container: mystery(c) } }").unwrap_err();
    match err {
        CompileError::Translate(TranslateError::UnknownFunction(name)) => {
            assert_eq!(name, "mystery");
        }
        other => panic!("expected UnknownFunction, got {other:?}"),
    }
}

#[test]
fn json_backend_is_total_over_a_rule_exercising_every_expression_shape() {
    let source = r#"rule full {
        description: "exercises every expression shape";
        priority: Warn;
        lst = ["a", "b"];
        all {
            c in container:
                c.active: exist {
                    x in c:
                        (x.count + 1) * 2 > 0
                        and x.tech in lst
                        or not x.legacy
                        and (x.ok ? 1 : 0) == 1
                }
        };
        except exist { c in container: c.tech not in lst }
    }"#;
    let json = compile_to_json(source).unwrap();
    assert!(!json.contains("null"));
    assert!(json.contains("\"type\":\"rule\""));
    assert!(json.contains("\"priority\":\"WARN\""));
}

#[test]
fn json_and_cypher_backends_agree_on_parseability_of_the_same_source() {
    let source = "rule r { all { s in system: exist { c in s: true } } }";
    assert!(compile_to_json(source).is_ok());
    assert!(compile_to_cypher(source).is_ok());
}
