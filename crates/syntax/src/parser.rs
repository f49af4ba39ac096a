use crate::{ast::*, Spanned, Token};
use diagnostics::{Diagnostic, ErrorCode, Span};

/// Recursive-descent parser for the declaration subset: top-level
/// `interface`, `type`, and `enum` declarations with full nested type syntax.
/// Statements outside the subset are skipped without a diagnostic; type
/// syntax outside the subset is folded into `TypeKind::Raw` spans so the
/// mapping stage can fall back to the original source text.
pub struct Parser {
    tokens: Vec<Spanned<Token>>,
    current: usize,
    diagnostics: Vec<Diagnostic>,
}

impl Parser {
    pub fn new(tokens: Vec<Spanned<Token>>) -> Self {
        Self {
            tokens,
            current: 0,
            diagnostics: Vec::new(),
        }
    }

    pub fn parse(&mut self) -> (Module, Vec<Diagnostic>) {
        let mut items = Vec::new();

        while !self.is_at_end() {
            self.skip_separators();
            if self.is_at_end() {
                break;
            }

            let before = self.current;
            if let Some(item) = self.parse_statement() {
                items.push(item);
            } else if self.current == before {
                self.advance();
            }
        }

        let module = Module { items };
        let diagnostics = std::mem::take(&mut self.diagnostics);
        (module, diagnostics)
    }

    fn parse_statement(&mut self) -> Option<Spanned<Item>> {
        let start_span = self.peek()?.span;

        // Modifiers carry no meaning for the conversion
        while self.match_token(&Token::Export) || self.match_token(&Token::Declare) {
            self.skip_newlines();
        }

        match &self.peek()?.value {
            Token::Interface => self.parse_interface(start_span),
            Token::Type => self.parse_type_alias(start_span),
            Token::Enum => self.parse_enum(start_span),
            Token::Const if self.next_meaningful_is(&Token::Enum) => {
                self.advance();
                self.skip_newlines();
                self.parse_enum(start_span)
            }
            _ => {
                // Imports, classes, namespaces, value declarations and the
                // like are outside the subset and are ignored.
                self.skip_statement();
                None
            }
        }
    }

    fn parse_interface(&mut self, start_span: Span) -> Option<Spanned<Item>> {
        self.consume(&Token::Interface, "Expected 'interface'")?;
        let name = self.expect_ident("Expected interface name")?;

        let type_params = if self.check(&Token::Less) {
            self.parse_type_params()?
        } else {
            Vec::new()
        };

        self.skip_newlines();
        let mut extends = Vec::new();
        if self.match_token(&Token::Extends) {
            loop {
                self.skip_newlines();
                let super_name = self.expect_qualified_name("Expected supertype name")?;
                // Heritage type arguments are dropped; only the name is kept
                if self.check(&Token::Less) {
                    self.skip_type_args();
                }
                extends.push(super_name);
                if !self.match_token(&Token::Comma) {
                    break;
                }
            }
            self.skip_newlines();
        }

        self.consume(&Token::LeftBrace, "Expected '{'")?;
        let members = self.parse_members();
        self.consume(&Token::RightBrace, "Expected '}'")?;

        let end_span = self.previous_span();
        Some(Spanned::new(
            Item::Interface(Interface {
                name,
                type_params,
                extends,
                members,
            }),
            start_span.to(end_span),
        ))
    }

    fn parse_type_alias(&mut self, start_span: Span) -> Option<Spanned<Item>> {
        self.consume(&Token::Type, "Expected 'type'")?;
        let name = self.expect_ident("Expected alias name")?;

        let type_params = if self.check(&Token::Less) {
            self.parse_type_params()?
        } else {
            Vec::new()
        };

        self.skip_newlines();
        self.consume(&Token::Equal, "Expected '='")?;
        self.skip_newlines();
        let ty = self.parse_type()?;
        let ty = self.widen_dangling(ty);
        self.match_token(&Token::Semicolon);

        let end_span = self.previous_span();
        Some(Spanned::new(
            Item::TypeAlias(TypeAlias {
                name,
                type_params,
                ty,
            }),
            start_span.to(end_span),
        ))
    }

    fn parse_enum(&mut self, start_span: Span) -> Option<Spanned<Item>> {
        self.consume(&Token::Enum, "Expected 'enum'")?;
        let name = self.expect_ident("Expected enum name")?;

        self.skip_newlines();
        self.consume(&Token::LeftBrace, "Expected '{'")?;

        let mut members = Vec::new();
        loop {
            self.skip_separators();
            if self.check(&Token::RightBrace) || self.is_at_end() {
                break;
            }
            let Some(member) = self.parse_enum_member() else {
                break;
            };
            members.push(member);
        }

        self.consume(&Token::RightBrace, "Expected '}'")?;

        let end_span = self.previous_span();
        Some(Spanned::new(
            Item::Enum(EnumDecl { name, members }),
            start_span.to(end_span),
        ))
    }

    fn parse_enum_member(&mut self) -> Option<EnumMember> {
        let Some(name) = self.member_name() else {
            self.error("Expected enum member name");
            return None;
        };

        let init = if self.match_token(&Token::Equal) {
            self.skip_newlines();
            // A literal tag must stand alone; `1 + 2` is a computed
            // initializer and converts as a bare case
            let literal_ends = matches!(
                self.token_at(self.current + 1),
                Some(
                    Token::Comma
                        | Token::RightBrace
                        | Token::Newline
                        | Token::Semicolon
                        | Token::Eof
                ) | None
            );
            match &self.peek()?.value {
                Token::String(text) if literal_ends => {
                    let text = text.clone();
                    self.advance();
                    EnumInit::Str(text)
                }
                Token::Number(text) if literal_ends => {
                    let text = text.clone();
                    self.advance();
                    EnumInit::Num(text)
                }
                _ => EnumInit::Other(self.skip_initializer()),
            }
        } else {
            EnumInit::None
        };

        Some(EnumMember { name, init })
    }

    /// Consumes an enum initializer expression outside the literal subset,
    /// up to the next top-depth `,` or `}`.
    fn skip_initializer(&mut self) -> Span {
        let start = self.peek_span();
        let mut end = start;
        let mut depth = 0usize;
        loop {
            let Some(tok) = self.peek() else { break };
            match &tok.value {
                Token::Eof => break,
                Token::Comma | Token::RightBrace if depth == 0 => break,
                Token::LeftBrace | Token::LeftParen | Token::LeftBracket => depth += 1,
                Token::RightBrace | Token::RightParen | Token::RightBracket => {
                    depth = depth.saturating_sub(1)
                }
                _ => {}
            }
            end = tok.span;
            self.advance();
        }
        start.to(end)
    }

    /// Shared by interface bodies and inline object types.
    fn parse_members(&mut self) -> Vec<Member> {
        let mut members = Vec::new();
        loop {
            self.skip_separators();
            if self.check(&Token::RightBrace) || self.is_at_end() {
                break;
            }
            members.push(self.parse_member());
        }
        members
    }

    fn parse_member(&mut self) -> Member {
        let start = self.peek_span();

        // Lookahead: a property signature is `[readonly] name [?] [: type]`.
        // Method, index, call and construct signatures and computed or
        // string-literal names take the unsupported path.
        let mut cursor = self.current;
        let mut has_readonly = false;
        if matches!(self.token_at(cursor), Some(Token::Readonly))
            && self
                .token_at(cursor + 1)
                .and_then(Token::ident_name)
                .is_some()
        {
            has_readonly = true;
            cursor += 1;
        }
        let name_ok = self.token_at(cursor).and_then(Token::ident_name).is_some();
        let property_like = name_ok
            && matches!(
                self.token_at(cursor + 1),
                Some(
                    Token::Question
                        | Token::Colon
                        | Token::Semicolon
                        | Token::Comma
                        | Token::Newline
                        | Token::RightBrace
                ) | None
            );

        if !property_like {
            return Member::Unsupported(self.skip_member());
        }

        if has_readonly {
            self.advance();
        }
        let name = match self.member_name() {
            Some(name) => name,
            None => return Member::Unsupported(start),
        };
        let optional = self.match_token(&Token::Question);
        let ty = if self.match_token(&Token::Colon) {
            self.skip_newlines();
            self.parse_type()
        } else {
            None
        };

        let end = self.previous_span();
        Member::Property(Property {
            name,
            optional,
            ty,
            span: start.to(end),
        })
    }

    /// Consumes one unsupported member up to the next top-depth separator.
    fn skip_member(&mut self) -> Span {
        let start = self.peek_span();
        let mut end = start;
        let mut depth = 0usize;
        loop {
            let Some(tok) = self.peek() else { break };
            match &tok.value {
                Token::Eof => break,
                Token::RightBrace if depth == 0 => break,
                Token::Semicolon | Token::Comma | Token::Newline if depth == 0 => break,
                Token::LeftBrace | Token::LeftParen | Token::LeftBracket | Token::Less => {
                    depth += 1
                }
                Token::RightBrace | Token::RightParen | Token::RightBracket | Token::Greater => {
                    depth = depth.saturating_sub(1)
                }
                _ => {}
            }
            end = tok.span;
            self.advance();
        }
        start.to(end)
    }

    // Type syntax. Precedence: union < intersection < postfix `[]` < primary.

    pub fn parse_type(&mut self) -> Option<TypeExpr> {
        let ty = self.parse_union_type()?;

        // A conditional (`T extends U ? X : Y`) is outside the subset; the
        // whole expression becomes one raw span
        if self.check(&Token::Extends) {
            let rest = self.raw_type(self.peek_span());
            return Some(TypeExpr {
                kind: TypeKind::Raw,
                span: ty.span.to(rest.span),
            });
        }

        Some(ty)
    }

    fn parse_union_type(&mut self) -> Option<TypeExpr> {
        // `type T = | A | B` is valid; tolerate the leading bar
        self.eat_operator(&Token::Pipe);
        self.skip_newlines();
        let first = self.parse_intersection_type()?;

        let mut parts = vec![first];
        while self.eat_operator(&Token::Pipe) {
            self.skip_newlines();
            parts.push(self.parse_intersection_type()?);
        }

        if parts.len() == 1 {
            return parts.pop();
        }
        let span = parts[0].span.to(parts[parts.len() - 1].span);
        Some(TypeExpr {
            kind: TypeKind::Union(parts),
            span,
        })
    }

    fn parse_intersection_type(&mut self) -> Option<TypeExpr> {
        let first = self.parse_postfix_type()?;

        let mut parts = vec![first];
        while self.eat_operator(&Token::Ampersand) {
            self.skip_newlines();
            parts.push(self.parse_postfix_type()?);
        }

        if parts.len() == 1 {
            return parts.pop();
        }
        let span = parts[0].span.to(parts[parts.len() - 1].span);
        Some(TypeExpr {
            kind: TypeKind::Intersection(parts),
            span,
        })
    }

    fn parse_postfix_type(&mut self) -> Option<TypeExpr> {
        let mut ty = self.parse_primary_type()?;

        while self.check(&Token::LeftBracket) {
            if matches!(self.token_at(self.current + 1), Some(Token::RightBracket)) {
                self.advance();
                self.advance();
                let span = ty.span.to(self.previous_span());
                ty = TypeExpr {
                    kind: TypeKind::Array(Box::new(ty)),
                    span,
                };
            } else {
                // Indexed access `T[K]` is outside the subset; fold the whole
                // postfix expression into a raw span
                self.advance();
                let mut depth = 1usize;
                while depth > 0 {
                    let Some(tok) = self.peek() else { break };
                    match &tok.value {
                        Token::Eof => break,
                        Token::LeftBracket => depth += 1,
                        Token::RightBracket => depth -= 1,
                        _ => {}
                    }
                    self.advance();
                }
                let span = ty.span.to(self.previous_span());
                ty = TypeExpr {
                    kind: TypeKind::Raw,
                    span,
                };
            }
        }

        Some(ty)
    }

    fn parse_primary_type(&mut self) -> Option<TypeExpr> {
        let start = self.peek()?.span;

        match &self.peek()?.value {
            Token::Ident(name) => {
                let name = name.clone();
                // Type operators are not in the mapping table; their whole
                // operand run becomes a raw span
                if matches!(name.as_str(), "keyof" | "typeof" | "infer" | "unique") {
                    return Some(self.raw_type(start));
                }
                self.advance();
                self.finish_reference(name, start)
            }
            Token::String(text) => {
                let text = text.clone();
                self.advance();
                Some(TypeExpr {
                    kind: TypeKind::StringLit(text),
                    span: start,
                })
            }
            Token::Number(text) => {
                let text = text.clone();
                self.advance();
                Some(TypeExpr {
                    kind: TypeKind::NumberLit(text),
                    span: start,
                })
            }
            // Template-literal types are outside the mapping subset
            Token::Template(_) => {
                self.advance();
                Some(TypeExpr {
                    kind: TypeKind::Raw,
                    span: start,
                })
            }
            Token::LeftBracket => self.parse_tuple_type(start),
            Token::LeftBrace => self.parse_object_type(start),
            Token::LeftParen => {
                if self.function_type_ahead() {
                    self.parse_function_type(start)
                } else {
                    // Parenthesized types are not in the mapping table
                    Some(self.raw_group(start))
                }
            }
            _ => Some(self.raw_type(start)),
        }
    }

    fn finish_reference(&mut self, mut name: String, start: Span) -> Option<TypeExpr> {
        // Qualified names like `ns.Type`
        while self.check(&Token::Dot) {
            self.advance();
            let part = self.expect_ident("Expected name after '.'")?;
            name.push('.');
            name.push_str(&part);
        }

        if let Some(keyword) = KeywordType::from_name(&name) {
            return Some(TypeExpr {
                kind: TypeKind::Keyword(keyword),
                span: start.to(self.previous_span()),
            });
        }

        let mut args = Vec::new();
        if self.match_token(&Token::Less) {
            loop {
                self.skip_newlines();
                if self.check(&Token::Greater) {
                    break;
                }
                args.push(self.parse_type()?);
                self.skip_newlines();
                if !self.match_token(&Token::Comma) {
                    break;
                }
            }
            self.consume(&Token::Greater, "Expected '>'")?;
        }

        Some(TypeExpr {
            kind: TypeKind::Reference { name, args },
            span: start.to(self.previous_span()),
        })
    }

    fn parse_tuple_type(&mut self, start: Span) -> Option<TypeExpr> {
        self.consume(&Token::LeftBracket, "Expected '['")?;
        let mut elements = Vec::new();
        loop {
            self.skip_newlines();
            if self.check(&Token::RightBracket) {
                break;
            }
            elements.push(self.parse_type()?);
            self.skip_newlines();
            if !self.match_token(&Token::Comma) {
                break;
            }
        }
        self.consume(&Token::RightBracket, "Expected ']'")?;

        Some(TypeExpr {
            kind: TypeKind::Tuple(elements),
            span: start.to(self.previous_span()),
        })
    }

    fn parse_object_type(&mut self, start: Span) -> Option<TypeExpr> {
        self.consume(&Token::LeftBrace, "Expected '{'")?;
        let members = self.parse_members();
        self.consume(&Token::RightBrace, "Expected '}'")?;

        Some(TypeExpr {
            kind: TypeKind::Object(members),
            span: start.to(self.previous_span()),
        })
    }

    fn parse_function_type(&mut self, start: Span) -> Option<TypeExpr> {
        self.consume(&Token::LeftParen, "Expected '('")?;
        let mut params = Vec::new();
        loop {
            self.skip_newlines();
            if self.check(&Token::RightParen) {
                break;
            }
            // Rest parameter dots
            while self.match_token(&Token::Dot) {}
            let Some(name) = self.member_name() else {
                self.error("Expected parameter name");
                break;
            };
            self.match_token(&Token::Question);
            let ty = if self.match_token(&Token::Colon) {
                self.skip_newlines();
                self.parse_type()
            } else {
                None
            };
            params.push(Param { name, ty });
            self.skip_newlines();
            if !self.match_token(&Token::Comma) {
                break;
            }
        }
        self.consume(&Token::RightParen, "Expected ')'")?;
        self.skip_newlines();
        self.consume(&Token::FatArrow, "Expected '=>'")?;
        self.skip_newlines();
        let ret = self.parse_type()?;

        let span = start.to(ret.span);
        Some(TypeExpr {
            kind: TypeKind::Function {
                params,
                ret: Box::new(ret),
            },
            span,
        })
    }

    /// True when the `(` at the cursor opens a function type's parameter
    /// list, i.e. its matching `)` is followed by `=>`.
    fn function_type_ahead(&self) -> bool {
        let mut cursor = self.current;
        let mut depth = 0usize;
        while let Some(tok) = self.tokens.get(cursor) {
            match &tok.value {
                Token::Eof => return false,
                Token::LeftParen => depth += 1,
                Token::RightParen => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        let mut after = cursor + 1;
                        while matches!(self.token_at(after), Some(Token::Newline)) {
                            after += 1;
                        }
                        return matches!(self.token_at(after), Some(Token::FatArrow));
                    }
                }
                _ => {}
            }
            cursor += 1;
        }
        false
    }

    /// Consumes a balanced `( ... )` group as a raw type.
    fn raw_group(&mut self, start: Span) -> TypeExpr {
        let mut depth = 0usize;
        loop {
            let Some(tok) = self.peek() else { break };
            match &tok.value {
                Token::Eof => break,
                Token::LeftParen => depth += 1,
                Token::RightParen => depth = depth.saturating_sub(1),
                _ => {}
            }
            self.advance();
            if depth == 0 {
                break;
            }
        }
        TypeExpr {
            kind: TypeKind::Raw,
            span: start.to(self.previous_span()),
        }
    }

    /// Widens an alias right-hand side that is followed by syntax other than
    /// a terminator into one raw span, so the fallback path renders the whole
    /// expression verbatim instead of dropping the trailing tokens.
    fn widen_dangling(&mut self, ty: TypeExpr) -> TypeExpr {
        let terminated = matches!(
            self.peek().map(|t| &t.value),
            Some(
                Token::Semicolon
                    | Token::Newline
                    | Token::Eof
                    | Token::Interface
                    | Token::Type
                    | Token::Enum
                    | Token::Export
                    | Token::Declare
                    | Token::Const
            ) | None
        );
        if terminated {
            return ty;
        }
        let rest = self.raw_type(self.peek_span());
        TypeExpr {
            kind: TypeKind::Raw,
            span: ty.span.to(rest.span),
        }
    }

    /// Consumes an unrecognized type up to the next top-depth terminator.
    fn raw_type(&mut self, start: Span) -> TypeExpr {
        let mut end = start;
        let mut depth = 0usize;
        loop {
            let Some(tok) = self.peek() else { break };
            let stop = depth == 0
                && matches!(
                    &tok.value,
                    Token::Eof
                        | Token::Comma
                        | Token::Semicolon
                        | Token::Newline
                        | Token::RightBrace
                        | Token::RightParen
                        | Token::RightBracket
                        | Token::Greater
                        | Token::Pipe
                        | Token::Ampersand
                        | Token::FatArrow
                        | Token::Interface
                        | Token::Type
                        | Token::Enum
                        | Token::Export
                        | Token::Declare
                        | Token::Const
                );
            if stop {
                break;
            }
            match &tok.value {
                Token::LeftBrace | Token::LeftParen | Token::LeftBracket | Token::Less => {
                    depth += 1
                }
                Token::RightBrace | Token::RightParen | Token::RightBracket | Token::Greater => {
                    depth = depth.saturating_sub(1)
                }
                _ => {}
            }
            end = tok.span;
            self.advance();
        }
        TypeExpr {
            kind: TypeKind::Raw,
            span: start.to(end),
        }
    }

    fn parse_type_params(&mut self) -> Option<Vec<String>> {
        self.consume(&Token::Less, "Expected '<'")?;
        let mut params = Vec::new();
        loop {
            self.skip_newlines();
            if self.check(&Token::Greater) {
                break;
            }
            let name = self.expect_ident("Expected type parameter name")?;
            params.push(name);
            // Constraints and defaults are dropped
            self.skip_constraint();
            if !self.match_token(&Token::Comma) {
                break;
            }
        }
        self.consume(&Token::Greater, "Expected '>'")?;
        Some(params)
    }

    fn skip_constraint(&mut self) {
        let mut depth = 0usize;
        loop {
            let Some(tok) = self.peek() else { break };
            match &tok.value {
                Token::Eof => break,
                Token::Comma | Token::Greater if depth == 0 => break,
                Token::Less | Token::LeftParen | Token::LeftBracket | Token::LeftBrace => {
                    depth += 1
                }
                Token::Greater | Token::RightParen | Token::RightBracket | Token::RightBrace => {
                    depth = depth.saturating_sub(1)
                }
                _ => {}
            }
            self.advance();
        }
    }

    fn skip_type_args(&mut self) {
        if !self.match_token(&Token::Less) {
            return;
        }
        let mut depth = 1usize;
        while depth > 0 {
            let Some(tok) = self.peek() else { break };
            match &tok.value {
                Token::Eof => break,
                Token::Less => depth += 1,
                Token::Greater => depth -= 1,
                _ => {}
            }
            self.advance();
        }
    }

    /// Consumes one statement outside the subset, including any braced body.
    fn skip_statement(&mut self) {
        let mut depth = 0usize;
        loop {
            let Some(tok) = self.peek() else { break };
            match &tok.value {
                Token::Eof => break,
                Token::Newline | Token::Semicolon if depth == 0 => {
                    self.advance();
                    break;
                }
                Token::LeftBrace | Token::LeftParen | Token::LeftBracket => {
                    depth += 1;
                    self.advance();
                }
                Token::RightBrace => {
                    depth = depth.saturating_sub(1);
                    self.advance();
                    if depth == 0 {
                        break;
                    }
                }
                Token::RightParen | Token::RightBracket => {
                    depth = depth.saturating_sub(1);
                    self.advance();
                }
                _ => {
                    self.advance();
                }
            }
        }
    }

    // Helper methods

    fn peek(&self) -> Option<&Spanned<Token>> {
        self.tokens.get(self.current)
    }

    fn token_at(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index).map(|t| &t.value)
    }

    fn peek_span(&self) -> Span {
        self.peek()
            .map(|t| t.span)
            .unwrap_or_else(|| Span::new(0, 0, 0))
    }

    fn previous(&self) -> Option<&Spanned<Token>> {
        if self.current > 0 {
            self.tokens.get(self.current - 1)
        } else {
            None
        }
    }

    fn previous_span(&self) -> Span {
        self.previous()
            .map(|t| t.span)
            .unwrap_or_else(|| Span::new(0, 0, 0))
    }

    fn advance(&mut self) -> Option<&Spanned<Token>> {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    fn is_at_end(&self) -> bool {
        self.peek().map(|t| &t.value) == Some(&Token::Eof)
    }

    fn match_token(&mut self, token: &Token) -> bool {
        if self.check(token) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn check(&self, token: &Token) -> bool {
        if let Some(current) = self.peek() {
            std::mem::discriminant(&current.value) == std::mem::discriminant(token)
        } else {
            false
        }
    }

    /// Consumes `token` even when newlines precede it; used for the `|`, `&`
    /// and similar infix operators that may start a continuation line.
    fn eat_operator(&mut self, token: &Token) -> bool {
        let mut cursor = self.current;
        while matches!(self.token_at(cursor), Some(Token::Newline)) {
            cursor += 1;
        }
        let found = self
            .token_at(cursor)
            .map(|t| std::mem::discriminant(t) == std::mem::discriminant(token))
            .unwrap_or(false);
        if found {
            self.current = cursor + 1;
        }
        found
    }

    fn next_meaningful_is(&self, token: &Token) -> bool {
        let mut cursor = self.current + 1;
        while matches!(self.token_at(cursor), Some(Token::Newline)) {
            cursor += 1;
        }
        self.token_at(cursor)
            .map(|t| std::mem::discriminant(t) == std::mem::discriminant(token))
            .unwrap_or(false)
    }

    fn consume(&mut self, token: &Token, message: &str) -> Option<&Spanned<Token>> {
        if self.check(token) {
            self.advance()
        } else {
            self.error(message);
            None
        }
    }

    fn expect_ident(&mut self, message: &str) -> Option<String> {
        if let Some(Token::Ident(name)) = self.peek().map(|t| &t.value) {
            let name = name.clone();
            self.advance();
            Some(name)
        } else {
            self.error(message);
            None
        }
    }

    fn expect_qualified_name(&mut self, message: &str) -> Option<String> {
        let mut name = self.expect_ident(message)?;
        while self.check(&Token::Dot) {
            self.advance();
            let part = self.expect_ident("Expected name after '.'")?;
            name.push('.');
            name.push_str(&part);
        }
        Some(name)
    }

    /// Takes an identifier-or-keyword token as a member name.
    fn member_name(&mut self) -> Option<String> {
        let name = self.peek()?.value.ident_name()?.to_string();
        self.advance();
        Some(name)
    }

    fn error(&mut self, message: &str) {
        if let Some(current) = self.peek() {
            let span = current.span;
            self.diagnostics
                .push(Diagnostic::error(ErrorCode::ParseError, span, message));
        }
    }

    fn skip_newlines(&mut self) {
        while let Some(token) = self.peek() {
            if matches!(token.value, Token::Newline) {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Newlines, semicolons and commas between members and declarations.
    fn skip_separators(&mut self) {
        while let Some(token) = self.peek() {
            if matches!(
                token.value,
                Token::Newline | Token::Semicolon | Token::Comma
            ) {
                self.advance();
            } else {
                break;
            }
        }
    }
}
