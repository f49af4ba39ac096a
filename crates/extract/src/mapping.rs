use diagnostics::{Diagnostic, NoteCode, Span};
use syntax::ast::{KeywordType, Member, Param, TypeExpr, TypeKind};

/// Maps one type node to its Scala type string.
///
/// Total: every node kind produces some string. The canonical numeric mapping
/// is `number` -> `Int`. Unrecognized syntax (`TypeKind::Raw`) is rendered
/// verbatim from `source` and records one note. Diagnostics are threaded
/// through the recursion as an explicit out-parameter; no other state is
/// touched, so identical node shapes always produce identical strings.
pub fn scala_type(ty: &TypeExpr, source: &str, diagnostics: &mut Vec<Diagnostic>) -> String {
    match &ty.kind {
        TypeKind::Keyword(keyword) => keyword_type(*keyword).to_string(),
        TypeKind::Reference { name, args } if name == "Array" && args.len() == 1 => {
            format!("List[{}]", scala_type(&args[0], source, diagnostics))
        }
        TypeKind::Reference { name, args } => {
            if args.is_empty() {
                name.clone()
            } else {
                let args = args
                    .iter()
                    .map(|arg| scala_type(arg, source, diagnostics))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{}[{}]", name, args)
            }
        }
        TypeKind::Array(element) => {
            format!("List[{}]", scala_type(element, source, diagnostics))
        }
        TypeKind::Union(parts) => parts
            .iter()
            .map(|part| scala_type(part, source, diagnostics))
            .collect::<Vec<_>>()
            .join(" | "),
        TypeKind::Intersection(parts) => parts
            .iter()
            .map(|part| scala_type(part, source, diagnostics))
            .collect::<Vec<_>>()
            .join(" & "),
        TypeKind::Tuple(elements) => {
            let elements = elements
                .iter()
                .map(|element| scala_type(element, source, diagnostics))
                .collect::<Vec<_>>()
                .join(", ");
            format!("({})", elements)
        }
        TypeKind::Function { params, ret } => {
            let params: Vec<String> = params
                .iter()
                .map(|param| param_type(param, source, diagnostics))
                .collect();
            let ret = scala_type(ret, source, diagnostics);
            match params.len() {
                0 => format!("() => {}", ret),
                1 => format!("{} => {}", params[0], ret),
                _ => format!("({}) => {}", params.join(", "), ret),
            }
        }
        // Re-quoted with double quotes, content unchanged
        TypeKind::StringLit(text) => format!("\"{}\"", text),
        TypeKind::NumberLit(text) => text.clone(),
        TypeKind::Object(members) => {
            // Only property signatures are considered
            let fields = members
                .iter()
                .filter_map(|member| match member {
                    Member::Property(prop) => {
                        let field_ty = match &prop.ty {
                            Some(ty) => scala_type(ty, source, diagnostics),
                            None => "Any".to_string(),
                        };
                        Some(format!("{}: {}", prop.name, field_ty))
                    }
                    Member::Unsupported(_) => None,
                })
                .collect::<Vec<_>>()
                .join("; ");
            format!("{{{}}}", fields)
        }
        // The named fallback arm: verbatim source text plus one note
        TypeKind::Raw => {
            diagnostics.push(Diagnostic::note(
                NoteCode::UnsupportedType,
                ty.span,
                "Unsupported type syntax, kept verbatim",
            ));
            snippet(source, ty.span).to_string()
        }
    }
}

fn param_type(param: &Param, source: &str, diagnostics: &mut Vec<Diagnostic>) -> String {
    match &param.ty {
        Some(ty) => scala_type(ty, source, diagnostics),
        None => "Any".to_string(),
    }
}

fn keyword_type(keyword: KeywordType) -> &'static str {
    match keyword {
        KeywordType::String => "String",
        KeywordType::Number => "Int",
        KeywordType::Boolean => "Boolean",
        KeywordType::Any | KeywordType::Unknown => "Any",
        KeywordType::Void | KeywordType::Undefined => "Unit",
        KeywordType::Null => "Null",
    }
}

fn snippet(source: &str, span: Span) -> &str {
    source
        .get(span.start as usize..span.end as usize)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use syntax::{Item, Lexer, Parser};

    /// Parses `type T = <input>;` and returns the alias's type node with the
    /// full source, so mapping sees realistic spans.
    fn type_node(input: &str) -> (TypeExpr, String) {
        let source = format!("type T = {};", input);
        let mut lexer = Lexer::new(source.clone(), 0);
        let tokens = lexer.tokenize();
        let mut parser = Parser::new(tokens);
        let (module, diagnostics) = parser.parse();
        assert!(diagnostics.is_empty(), "diagnostics: {:?}", diagnostics);
        let Item::TypeAlias(alias) = &module.items[0].value else {
            panic!("expected alias");
        };
        (alias.ty.clone(), source)
    }

    fn map(input: &str) -> (String, usize) {
        let (ty, source) = type_node(input);
        let mut diagnostics = Vec::new();
        let mapped = scala_type(&ty, &source, &mut diagnostics);
        (mapped, diagnostics.len())
    }

    #[test]
    fn primitives_follow_the_table() {
        assert_eq!(map("string").0, "String");
        assert_eq!(map("number").0, "Int");
        assert_eq!(map("boolean").0, "Boolean");
        assert_eq!(map("any").0, "Any");
        assert_eq!(map("unknown").0, "Any");
        assert_eq!(map("void").0, "Unit");
        assert_eq!(map("undefined").0, "Unit");
        assert_eq!(map("null").0, "Null");
    }

    #[test]
    fn bare_references_pass_through() {
        assert_eq!(map("UserId").0, "UserId");
        assert_eq!(map("ns.Thing").0, "ns.Thing");
    }

    #[test]
    fn array_forms_become_list() {
        assert_eq!(map("string[]").0, "List[String]");
        assert_eq!(map("Array<number>").0, "List[Int]");
        assert_eq!(map("string[][]").0, "List[List[String]]");
        assert_eq!(map("Array<Array<boolean>>").0, "List[List[Boolean]]");
    }

    #[test]
    fn generic_references_use_brackets() {
        assert_eq!(map("Container<string>").0, "Container[String]");
        assert_eq!(map("Map<string, number>").0, "Map[String, Int]");
    }

    #[test]
    fn union_order_is_preserved() {
        assert_eq!(map("\"a\" | \"b\" | number").0, "\"a\" | \"b\" | Int");
        assert_eq!(map("string | string").0, "String | String");
    }

    #[test]
    fn intersections_keep_ampersands() {
        assert_eq!(map("A & B & C").0, "A & B & C");
    }

    #[test]
    fn tuples_become_parenthesized_lists() {
        assert_eq!(map("[string, number]").0, "(String, Int)");
    }

    #[test]
    fn function_arity_shapes() {
        assert_eq!(map("() => void").0, "() => Unit");
        assert_eq!(map("(x: string) => number").0, "String => Int");
        assert_eq!(map("(x: string, y: boolean) => void").0, "(String, Boolean) => Unit");
        assert_eq!(map("(x) => void").0, "Any => Unit");
    }

    #[test]
    fn literal_types_keep_their_text() {
        assert_eq!(map("\"active\"").0, "\"active\"");
        assert_eq!(map("'active'").0, "\"active\"");
        assert_eq!(map("42").0, "42");
    }

    #[test]
    fn inline_objects_list_property_signatures_only() {
        assert_eq!(
            map("{theme: string; debug: boolean}").0,
            "{theme: String; debug: Boolean}"
        );
    }

    #[test]
    fn fallback_is_verbatim_with_one_note() {
        let (mapped, notes) = map("keyof Thing");
        assert_eq!(mapped, "keyof Thing");
        assert_eq!(notes, 1);
    }

    #[test]
    fn parenthesized_types_fall_back_verbatim() {
        let (mapped, notes) = map("(A | B)");
        assert_eq!(mapped, "(A | B)");
        assert_eq!(notes, 1);
    }

    #[test]
    fn mapping_is_referentially_transparent() {
        let (ty, source) = type_node("Array<string | null>");
        let mut first_diags = Vec::new();
        let mut second_diags = Vec::new();
        let first = scala_type(&ty, &source, &mut first_diags);
        let second = scala_type(&ty, &source, &mut second_diags);
        assert_eq!(first, second);
        assert_eq!(first, "List[String | Null]");
        assert_eq!(first_diags.len(), second_diags.len());
    }
}
