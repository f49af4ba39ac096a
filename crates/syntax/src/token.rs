#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    // Literals
    String(String),
    Number(String),
    /// Backtick-delimited template literal, raw inner text.
    Template(String),

    // Identifiers
    Ident(String),

    // Keywords
    Interface,
    Type,
    Enum,
    Extends,
    Export,
    Declare,
    Const,
    Readonly,

    // Punctuation
    LeftParen,    // (
    RightParen,   // )
    LeftBrace,    // {
    RightBrace,   // }
    LeftBracket,  // [
    RightBracket, // ]
    Comma,        // ,
    Semicolon,    // ;
    Colon,        // :
    Question,     // ?
    Pipe,         // |
    Ampersand,    // &
    Less,         // <
    Greater,      // >
    Equal,        // =
    FatArrow,     // =>
    Minus,        // -
    Dot,          // .

    // Special
    Newline,
    Eof,
}

impl Token {
    pub fn keyword(s: &str) -> Option<Token> {
        match s {
            "interface" => Some(Token::Interface),
            "type" => Some(Token::Type),
            "enum" => Some(Token::Enum),
            "extends" => Some(Token::Extends),
            "export" => Some(Token::Export),
            "declare" => Some(Token::Declare),
            "const" => Some(Token::Const),
            "readonly" => Some(Token::Readonly),
            _ => None,
        }
    }

    /// Text for tokens usable as member names. TypeScript allows keywords as
    /// property and enum member names (`interface X { type: string }`).
    pub fn ident_name(&self) -> Option<&str> {
        match self {
            Token::Ident(name) => Some(name),
            Token::Interface => Some("interface"),
            Token::Type => Some("type"),
            Token::Enum => Some("enum"),
            Token::Extends => Some("extends"),
            Token::Export => Some("export"),
            Token::Declare => Some("declare"),
            Token::Const => Some("const"),
            Token::Readonly => Some("readonly"),
            _ => None,
        }
    }
}
