//! Intermediate representation for emitted Scala declarations.
//!
//! Built fresh by extraction for each conversion call, consumed once by
//! emission, then discarded. Declaration order is the order of first
//! top-level occurrence in the source; it is never reordered or deduplicated.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Trait(TraitDecl),
    TypeAlias(TypeAliasDecl),
    Enum(EnumDecl),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraitDecl {
    pub name: String,
    pub type_params: Vec<String>,
    pub extends: Vec<String>,
    pub members: Vec<ValMember>,
}

/// One trait field. Optionality has already been resolved into the type
/// string as a single `Option[...]` wrapper; there is no separate flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValMember {
    pub name: String,
    pub ty: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeAliasDecl {
    pub name: String,
    pub type_params: Vec<String>,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDecl {
    pub name: String,
    pub cases: Vec<EnumCase>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumCase {
    pub name: String,
    pub value: CaseValue,
}

/// Backing value of an enum case, carried as source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseValue {
    Str(String),
    Num(String),
    None,
}
