use crate::Spanned;
use diagnostics::Span;

#[derive(Debug, Clone)]
pub struct Module {
    pub items: Vec<Spanned<Item>>,
}

#[derive(Debug, Clone)]
pub enum Item {
    Interface(Interface),
    TypeAlias(TypeAlias),
    Enum(EnumDecl),
}

#[derive(Debug, Clone)]
pub struct Interface {
    pub name: String,
    pub type_params: Vec<String>,
    pub extends: Vec<String>,
    pub members: Vec<Member>,
}

#[derive(Debug, Clone)]
pub enum Member {
    Property(Property),
    /// Method, index, call, or construct signature, or a computed name.
    /// Only the covered source span is kept.
    Unsupported(Span),
}

#[derive(Debug, Clone)]
pub struct Property {
    pub name: String,
    pub optional: bool,
    pub ty: Option<TypeExpr>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct TypeAlias {
    pub name: String,
    pub type_params: Vec<String>,
    pub ty: TypeExpr,
}

#[derive(Debug, Clone)]
pub struct EnumDecl {
    pub name: String,
    pub members: Vec<EnumMember>,
}

#[derive(Debug, Clone)]
pub struct EnumMember {
    pub name: String,
    pub init: EnumInit,
}

#[derive(Debug, Clone)]
pub enum EnumInit {
    None,
    Str(String),
    Num(String),
    /// Computed or otherwise unsupported initializer; converted as a bare case.
    Other(Span),
}

#[derive(Debug, Clone)]
pub struct TypeExpr {
    pub kind: TypeKind,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub enum TypeKind {
    Keyword(KeywordType),
    Reference { name: String, args: Vec<TypeExpr> },
    Array(Box<TypeExpr>),
    Union(Vec<TypeExpr>),
    Intersection(Vec<TypeExpr>),
    Tuple(Vec<TypeExpr>),
    Function { params: Vec<Param>, ret: Box<TypeExpr> },
    StringLit(String),
    NumberLit(String),
    Object(Vec<Member>),
    /// Syntax outside the supported subset. Rendered verbatim from the span.
    Raw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordType {
    String,
    Number,
    Boolean,
    Any,
    Unknown,
    Void,
    Undefined,
    Null,
}

impl KeywordType {
    pub fn from_name(name: &str) -> Option<KeywordType> {
        match name {
            "string" => Some(KeywordType::String),
            "number" => Some(KeywordType::Number),
            "boolean" => Some(KeywordType::Boolean),
            "any" => Some(KeywordType::Any),
            "unknown" => Some(KeywordType::Unknown),
            "void" => Some(KeywordType::Void),
            "undefined" => Some(KeywordType::Undefined),
            "null" => Some(KeywordType::Null),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: Option<TypeExpr>,
}
