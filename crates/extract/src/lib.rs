//! Extraction stage: walks top-level AST items in order and builds the
//! Scala declaration IR, invoking the type-mapping algorithm for every type
//! position. Unsupported members degrade to a note; nothing here aborts.

pub mod mapping;

use diagnostics::{Diagnostic, NoteCode};
use ir::{CaseValue, Declaration, EnumCase, TraitDecl, TypeAliasDecl, ValMember};
use syntax::ast::{self, EnumInit, Item, Member, Module, TypeKind};

pub struct Extraction {
    pub declarations: Vec<Declaration>,
    pub diagnostics: Vec<Diagnostic>,
}

pub fn extract(module: &Module, source: &str) -> Extraction {
    let mut declarations = Vec::new();
    let mut diagnostics = Vec::new();

    for item in &module.items {
        match &item.value {
            Item::Interface(interface) => {
                declarations.push(Declaration::Trait(trait_decl(
                    interface.name.clone(),
                    interface.type_params.clone(),
                    interface.extends.clone(),
                    &interface.members,
                    source,
                    &mut diagnostics,
                )));
            }
            Item::TypeAlias(alias) => match &alias.ty.kind {
                // `type X = {...}` is structurally an interface and gets the
                // same trait ergonomics
                TypeKind::Object(members) => {
                    declarations.push(Declaration::Trait(trait_decl(
                        alias.name.clone(),
                        alias.type_params.clone(),
                        Vec::new(),
                        members,
                        source,
                        &mut diagnostics,
                    )));
                }
                _ => {
                    let target = mapping::scala_type(&alias.ty, source, &mut diagnostics);
                    declarations.push(Declaration::TypeAlias(TypeAliasDecl {
                        name: alias.name.clone(),
                        type_params: alias.type_params.clone(),
                        target,
                    }));
                }
            },
            Item::Enum(decl) => {
                declarations.push(Declaration::Enum(enum_decl(decl)));
            }
        }
    }

    Extraction {
        declarations,
        diagnostics,
    }
}

fn trait_decl(
    name: String,
    type_params: Vec<String>,
    extends: Vec<String>,
    members: &[Member],
    source: &str,
    diagnostics: &mut Vec<Diagnostic>,
) -> TraitDecl {
    let mut vals = Vec::new();
    for member in members {
        match member {
            Member::Property(prop) => {
                let ty = match &prop.ty {
                    Some(ty) => mapping::scala_type(ty, source, diagnostics),
                    None => "Any".to_string(),
                };
                // `Option[...]` is applied exactly once, here and nowhere else
                let ty = if prop.optional {
                    format!("Option[{}]", ty)
                } else {
                    ty
                };
                vals.push(ValMember {
                    name: prop.name.clone(),
                    ty,
                });
            }
            Member::Unsupported(span) => {
                diagnostics.push(Diagnostic::note(
                    NoteCode::UnsupportedMember,
                    *span,
                    format!("Unsupported member in {}", name),
                ));
            }
        }
    }

    TraitDecl {
        name,
        type_params,
        extends,
        members: vals,
    }
}

fn enum_decl(decl: &ast::EnumDecl) -> ir::EnumDecl {
    let cases = decl
        .members
        .iter()
        .map(|member| {
            let value = match &member.init {
                EnumInit::Str(text) => CaseValue::Str(text.clone()),
                EnumInit::Num(text) => CaseValue::Num(text.clone()),
                // Computed initializers convert as bare cases
                EnumInit::None | EnumInit::Other(_) => CaseValue::None,
            };
            EnumCase {
                name: member.name.clone(),
                value,
            }
        })
        .collect();

    ir::EnumDecl {
        name: decl.name.clone(),
        cases,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syntax::{Lexer, Parser};

    fn run(source: &str) -> Extraction {
        let mut lexer = Lexer::new(source.to_string(), 0);
        let tokens = lexer.tokenize();
        let mut parser = Parser::new(tokens);
        let (module, parse_diagnostics) = parser.parse();
        assert!(
            parse_diagnostics.is_empty(),
            "parse diagnostics: {:?}",
            parse_diagnostics
        );
        extract(&module, source)
    }

    #[test]
    fn interface_becomes_trait_in_member_order() {
        let extraction = run("interface Person { name: string; age: number }");
        assert_eq!(extraction.declarations.len(), 1);
        let Declaration::Trait(decl) = &extraction.declarations[0] else {
            panic!("expected trait");
        };
        assert_eq!(decl.name, "Person");
        let members: Vec<(&str, &str)> = decl
            .members
            .iter()
            .map(|m| (m.name.as_str(), m.ty.as_str()))
            .collect();
        assert_eq!(members, vec![("name", "String"), ("age", "Int")]);
    }

    #[test]
    fn optional_member_is_wrapped_exactly_once() {
        let extraction = run("interface P { age?: number; tags?: string[] }");
        let Declaration::Trait(decl) = &extraction.declarations[0] else {
            panic!("expected trait");
        };
        assert_eq!(decl.members[0].ty, "Option[Int]");
        assert_eq!(decl.members[1].ty, "Option[List[String]]");
    }

    #[test]
    fn object_literal_alias_becomes_trait() {
        let extraction = run("type Config = { theme: string; debug: boolean };");
        let Declaration::Trait(decl) = &extraction.declarations[0] else {
            panic!("expected trait");
        };
        assert_eq!(decl.name, "Config");
        assert_eq!(decl.members.len(), 2);
        assert!(decl.extends.is_empty());
    }

    #[test]
    fn other_aliases_stay_aliases() {
        let extraction = run("type Id = string;\ntype Pair<A, B> = [A, B];");
        let Declaration::TypeAlias(id) = &extraction.declarations[0] else {
            panic!("expected alias");
        };
        assert_eq!(id.target, "String");
        let Declaration::TypeAlias(pair) = &extraction.declarations[1] else {
            panic!("expected alias");
        };
        assert_eq!(pair.type_params, vec!["A", "B"]);
        assert_eq!(pair.target, "(A, B)");
    }

    #[test]
    fn enum_cases_carry_value_tags() {
        let extraction =
            run("enum Status { Active = \"active\", Count = 3, Bare, Weird = 1 + 2 }");
        let Declaration::Enum(decl) = &extraction.declarations[0] else {
            panic!("expected enum");
        };
        assert_eq!(decl.cases.len(), 4);
        assert_eq!(decl.cases[0].value, CaseValue::Str("active".to_string()));
        assert_eq!(decl.cases[1].value, CaseValue::Num("3".to_string()));
        assert_eq!(decl.cases[2].value, CaseValue::None);
        assert_eq!(decl.cases[3].value, CaseValue::None);
    }

    #[test]
    fn unsupported_members_are_skipped_with_a_note() {
        let extraction = run("interface S { id: number; run(x: string): void }");
        let Declaration::Trait(decl) = &extraction.declarations[0] else {
            panic!("expected trait");
        };
        assert_eq!(decl.members.len(), 1);
        assert_eq!(extraction.diagnostics.len(), 1);
        assert!(extraction.diagnostics[0]
            .message
            .contains("Unsupported member in S"));
    }

    #[test]
    fn declaration_order_mirrors_source_order() {
        let extraction = run(
            "type A = string;\ninterface B { x: number }\nenum C { One }\ntype A2 = A;",
        );
        let names: Vec<&str> = extraction
            .declarations
            .iter()
            .map(|d| match d {
                Declaration::Trait(t) => t.name.as_str(),
                Declaration::TypeAlias(a) => a.name.as_str(),
                Declaration::Enum(e) => e.name.as_str(),
            })
            .collect();
        assert_eq!(names, vec!["A", "B", "C", "A2"]);
    }
}
