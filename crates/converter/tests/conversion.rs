use converter::{convert, convert_with_diagnostics};

#[test]
fn empty_and_whitespace_input_yield_empty_output() {
    assert_eq!(convert(""), "");
    assert_eq!(convert("   \n  "), "");
    assert!(convert_with_diagnostics("   \n  ", 0).diagnostics.is_empty());
}

#[test]
fn simple_interface() {
    let output = convert("interface Person { name: string; age: number }");
    assert_eq!(output, "trait Person:\n  val name: String\n  val age: Int");
}

#[test]
fn simple_type_alias() {
    assert_eq!(convert("type Id = string;"), "type Id = String");
}

#[test]
fn inheritance_and_array_member() {
    let output = convert("interface Admin extends User { permissions: string[] }");
    assert_eq!(
        output,
        "trait Admin extends User:\n  val permissions: List[String]"
    );
}

#[test]
fn string_backed_enum() {
    let output = convert("enum Status { Active = \"active\", Inactive = \"inactive\" }");
    assert_eq!(
        output,
        "enum Status:\n  case Active extends Status(\"active\")\n  case Inactive extends Status(\"inactive\")"
    );
}

#[test]
fn member_count_matches_property_count() {
    let source = "interface Wide { a: string; b: number; c: boolean; d: any; e: null }";
    let output = convert(source);
    let val_lines = output.lines().filter(|l| l.starts_with("  val ")).count();
    assert_eq!(val_lines, 5);
}

#[test]
fn optional_is_wrapped_exactly_once() {
    let output = convert("interface P { age?: number }");
    assert_eq!(output, "trait P:\n  val age: Option[Int]");
    assert!(!output.contains("Option[Option"));
}

#[test]
fn nested_arrays_compose() {
    assert_eq!(convert("type M = string[][];"), "type M = List[List[String]]");
}

#[test]
fn union_branch_order_is_preserved() {
    assert_eq!(
        convert("type T = \"a\" | \"b\" | number;"),
        "type T = \"a\" | \"b\" | Int"
    );
}

#[test]
fn conversion_is_repeatable() {
    let source = "interface Box<T> { value: T; next?: Box<T> }";
    assert_eq!(convert(source), convert(source));
}

#[test]
fn declarations_are_blank_line_separated_in_source_order() {
    let output = convert("type Id = string;\ninterface User { id: Id }");
    assert_eq!(
        output,
        "type Id = String\n\ntrait User:\n  val id: Id"
    );
}

#[test]
fn unsupported_syntax_degrades_without_failing() {
    let conversion =
        convert_with_diagnostics("interface S { id: number; run(x: string): void }", 0);
    assert_eq!(conversion.scala, "trait S:\n  val id: Int");
    assert_eq!(conversion.diagnostics.len(), 1);
    assert!(!conversion.diagnostics[0].is_error());
}

#[test]
fn fallback_types_are_rendered_verbatim() {
    let conversion = convert_with_diagnostics("type K = keyof Thing;", 0);
    assert_eq!(conversion.scala, "type K = keyof Thing");
    assert_eq!(conversion.diagnostics.len(), 1);
}

#[test]
fn conditional_types_fall_back_verbatim() {
    let conversion =
        convert_with_diagnostics("type IsString<T> = T extends string ? true : false;", 0);
    assert_eq!(
        conversion.scala,
        "type IsString[T] = T extends string ? true : false"
    );
    assert_eq!(conversion.diagnostics.len(), 1);
    assert!(!conversion.diagnostics[0].is_error());
}

#[test]
fn template_literal_types_fall_back_verbatim() {
    let conversion = convert_with_diagnostics("type G = `id-${string}`;", 0);
    assert_eq!(conversion.scala, "type G = `id-${string}`");
    assert_eq!(conversion.diagnostics.len(), 1);
    assert!(!conversion.diagnostics[0].is_error());
}

#[test]
fn empty_enum_is_followed_by_one_blank_line() {
    let output = convert("enum E {}\ntype A = string;");
    assert_eq!(output, "enum E:\n\ntype A = String");
}

#[test]
fn diagnostics_carry_the_requested_file_id() {
    let conversion = convert_with_diagnostics("type K = keyof Thing;", 42);
    assert_eq!(conversion.diagnostics[0].span.file_id, 42);
}

#[test]
fn fixture_pair_pins_mapping_behavior() {
    let input = include_str!("fixtures/input.d.ts");
    let expected = include_str!("fixtures/expected.scala");
    assert_eq!(convert(input), expected.trim_end());
}
