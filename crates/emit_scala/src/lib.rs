//! Deterministic pretty-printer from the declaration IR to Scala 3 text.

use ir::{CaseValue, Declaration, EnumDecl, TraitDecl, TypeAliasDecl};

/// Emits the declaration list in IR order, separated by exactly one blank
/// line, with no leading or trailing blank line.
pub fn emit(declarations: &[Declaration]) -> String {
    declarations
        .iter()
        .map(emit_declaration)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn emit_declaration(declaration: &Declaration) -> String {
    match declaration {
        Declaration::Trait(decl) => emit_trait(decl),
        Declaration::TypeAlias(decl) => emit_type_alias(decl),
        Declaration::Enum(decl) => emit_enum(decl),
    }
}

fn emit_trait(decl: &TraitDecl) -> String {
    let extends = if decl.extends.is_empty() {
        String::new()
    } else {
        format!(" extends {}", decl.extends.join(", "))
    };

    let header = format!(
        "trait {}{}{}:",
        decl.name,
        type_params(&decl.type_params),
        extends
    );

    if decl.members.is_empty() {
        return header;
    }

    let members = decl
        .members
        .iter()
        .map(|member| format!("  val {}: {}", member.name, member.ty))
        .collect::<Vec<_>>()
        .join("\n");

    format!("{}\n{}", header, members)
}

fn emit_type_alias(decl: &TypeAliasDecl) -> String {
    format!(
        "type {}{} = {}",
        decl.name,
        type_params(&decl.type_params),
        decl.target
    )
}

fn emit_enum(decl: &EnumDecl) -> String {
    let header = format!("enum {}:", decl.name);
    if decl.cases.is_empty() {
        return header;
    }

    let cases = decl
        .cases
        .iter()
        .map(|case| match &case.value {
            CaseValue::Str(text) => {
                format!("  case {} extends {}(\"{}\")", case.name, decl.name, text)
            }
            CaseValue::Num(text) => {
                format!("  case {} extends {}({})", case.name, decl.name, text)
            }
            CaseValue::None => format!("  case {} extends {}", case.name, decl.name),
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("{}\n{}", header, cases)
}

fn type_params(params: &[String]) -> String {
    if params.is_empty() {
        String::new()
    } else {
        format!("[{}]", params.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ir::{EnumCase, ValMember};

    fn val(name: &str, ty: &str) -> ValMember {
        ValMember {
            name: name.to_string(),
            ty: ty.to_string(),
        }
    }

    #[test]
    fn trait_with_members_indents_vals() {
        let decl = Declaration::Trait(TraitDecl {
            name: "Person".to_string(),
            type_params: Vec::new(),
            extends: Vec::new(),
            members: vec![val("name", "String"), val("age", "Int")],
        });
        assert_eq!(
            emit(&[decl]),
            "trait Person:\n  val name: String\n  val age: Int"
        );
    }

    #[test]
    fn empty_trait_is_header_only() {
        let decl = Declaration::Trait(TraitDecl {
            name: "Marker".to_string(),
            type_params: Vec::new(),
            extends: Vec::new(),
            members: Vec::new(),
        });
        assert_eq!(emit(&[decl]), "trait Marker:");
    }

    #[test]
    fn trait_header_carries_params_and_supertypes() {
        let decl = Declaration::Trait(TraitDecl {
            name: "Admin".to_string(),
            type_params: vec!["T".to_string(), "U".to_string()],
            extends: vec!["User".to_string(), "Base".to_string()],
            members: vec![val("permissions", "List[String]")],
        });
        assert_eq!(
            emit(&[decl]),
            "trait Admin[T, U] extends User, Base:\n  val permissions: List[String]"
        );
    }

    #[test]
    fn alias_is_a_single_line() {
        let decl = Declaration::TypeAlias(TypeAliasDecl {
            name: "Pair".to_string(),
            type_params: vec!["A".to_string(), "B".to_string()],
            target: "(A, B)".to_string(),
        });
        assert_eq!(emit(&[decl]), "type Pair[A, B] = (A, B)");
    }

    #[test]
    fn enum_cases_render_value_tags() {
        let decl = Declaration::Enum(EnumDecl {
            name: "Status".to_string(),
            cases: vec![
                EnumCase {
                    name: "Active".to_string(),
                    value: CaseValue::Str("active".to_string()),
                },
                EnumCase {
                    name: "Count".to_string(),
                    value: CaseValue::Num("3".to_string()),
                },
                EnumCase {
                    name: "Bare".to_string(),
                    value: CaseValue::None,
                },
            ],
        });
        assert_eq!(
            emit(&[decl]),
            "enum Status:\n  case Active extends Status(\"active\")\n  case Count extends Status(3)\n  case Bare extends Status"
        );
    }

    #[test]
    fn empty_enum_is_header_only() {
        let empty = EnumDecl {
            name: "E".to_string(),
            cases: Vec::new(),
        };
        assert_eq!(emit(&[Declaration::Enum(empty.clone())]), "enum E:");

        let following = Declaration::TypeAlias(TypeAliasDecl {
            name: "A".to_string(),
            type_params: Vec::new(),
            target: "String".to_string(),
        });
        assert_eq!(
            emit(&[Declaration::Enum(empty), following]),
            "enum E:\n\ntype A = String"
        );
    }

    #[test]
    fn declarations_are_separated_by_one_blank_line() {
        let first = Declaration::TypeAlias(TypeAliasDecl {
            name: "Id".to_string(),
            type_params: Vec::new(),
            target: "String".to_string(),
        });
        let second = Declaration::Trait(TraitDecl {
            name: "User".to_string(),
            type_params: Vec::new(),
            extends: Vec::new(),
            members: vec![val("id", "Id")],
        });
        let output = emit(&[first, second]);
        assert_eq!(output, "type Id = String\n\ntrait User:\n  val id: Id");
        assert!(!output.starts_with('\n'));
        assert!(!output.ends_with('\n'));
    }
}
