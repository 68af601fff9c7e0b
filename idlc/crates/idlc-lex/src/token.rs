//! Token definitions for the IDL lexer.
//!
//! A [`Token`] pairs a [`TokenKind`] with its text and the [`Span`] it was
//! scanned from. The kind enumeration is closed: one variant per literal
//! family, one per punctuation symbol and one per reserved keyword.

use std::fmt;

use idlc_util::Span;

/// Declares the keyword variants of [`TokenKind`] together with the
/// tables derived from them, so the spelling list cannot drift from the
/// enum.
macro_rules! token_kinds {
    ($($variant:ident => $text:literal, $name:literal;)*) => {
        /// Classification of a lexical token.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum TokenKind {
            /// Malformed input; the token text is the diagnostic message
            Illegal,
            /// End of input
            Eof,
            /// Identifier (after escape-marker removal)
            Identifier,
            /// Integer literal: `42`, `012`, `0xAB`
            IntegerLiteral,
            /// Floating-point literal: `1.0e-2`, `.5`, `1e10`
            FloatingPointLiteral,
            /// Character literal: `'a'`
            CharacterLiteral,
            /// Wide character literal: `L'a'`
            WideCharacterLiteral,
            /// String literal: `"abc"`
            StringLiteral,
            /// Wide string literal: `L"abc"`
            WideStringLiteral,

            /// `;`
            Semicolon,
            /// `{`
            LBrace,
            /// `}`
            RBrace,
            /// `::`
            ScopeSeparator,
            /// `:`
            Colon,
            /// `,`
            Comma,
            /// `(`
            LParen,
            /// `)`
            RParen,
            /// `<`
            Lt,
            /// `>`
            Gt,
            /// `<<`
            Shl,
            /// `>>`
            Shr,
            /// `[`
            LBracket,
            /// `]`
            RBracket,
            /// `=`
            Eq,
            /// `|`
            Pipe,
            /// `^`
            Caret,
            /// `&`
            Amp,
            /// `+`
            Plus,
            /// `-`
            Minus,
            /// `*`
            Star,
            /// `/`
            Slash,
            /// `%`
            Percent,
            /// `~`
            Tilde,
            /// `\`
            Backslash,
            /// `@`
            At,

            $(
                #[doc = concat!("Keyword `", $text, "`")]
                $variant,
            )*
        }

        impl TokenKind {
            /// Every keyword kind, in declaration order.
            pub const KEYWORDS: &'static [TokenKind] = &[$(TokenKind::$variant),*];

            /// Looks up a keyword by its exact, case-sensitive spelling.
            ///
            /// # Example
            ///
            /// ```
            /// use idlc_lex::TokenKind;
            ///
            /// assert_eq!(TokenKind::from_keyword("ValueBase"), Some(TokenKind::KwValueBase));
            /// assert_eq!(TokenKind::from_keyword("valuebase"), None);
            /// ```
            pub fn from_keyword(text: &str) -> Option<TokenKind> {
                match text {
                    $($text => Some(TokenKind::$variant),)*
                    _ => None,
                }
            }

            fn keyword_str(self) -> Option<&'static str> {
                match self {
                    $(TokenKind::$variant => Some($text),)*
                    _ => None,
                }
            }

            fn keyword_name(self) -> Option<&'static str> {
                match self {
                    $(TokenKind::$variant => Some($name),)*
                    _ => None,
                }
            }
        }
    };
}

token_kinds! {
    KwAbstract => "abstract", "KW_ABSTRACT";
    KwAny => "any", "KW_ANY";
    KwAlias => "alias", "KW_ALIAS";
    KwAttribute => "attribute", "KW_ATTRIBUTE";
    KwBitfield => "bitfield", "KW_BITFIELD";
    KwBitmask => "bitmask", "KW_BITMASK";
    KwBitset => "bitset", "KW_BITSET";
    KwBoolean => "boolean", "KW_BOOLEAN";
    KwCase => "case", "KW_CASE";
    KwChar => "char", "KW_CHAR";
    KwComponent => "component", "KW_COMPONENT";
    KwConnector => "connector", "KW_CONNECTOR";
    KwConst => "const", "KW_CONST";
    KwConsumes => "consumes", "KW_CONSUMES";
    KwContext => "context", "KW_CONTEXT";
    KwCustom => "custom", "KW_CUSTOM";
    KwDefault => "default", "KW_DEFAULT";
    KwDouble => "double", "KW_DOUBLE";
    KwException => "exception", "KW_EXCEPTION";
    KwEmits => "emits", "KW_EMITS";
    KwEnum => "enum", "KW_ENUM";
    KwEventtype => "eventtype", "KW_EVENTTYPE";
    KwFactory => "factory", "KW_FACTORY";
    KwFalse => "FALSE", "KW_FALSE";
    KwFinder => "finder", "KW_FINDER";
    KwFixed => "fixed", "KW_FIXED";
    KwFloat => "float", "KW_FLOAT";
    KwGetraises => "getraises", "KW_GETRAISES";
    KwHome => "home", "KW_HOME";
    KwImport => "import", "KW_IMPORT";
    KwIn => "in", "KW_IN";
    KwInout => "inout", "KW_INOUT";
    KwInterface => "interface", "KW_INTERFACE";
    KwLocal => "local", "KW_LOCAL";
    KwLong => "long", "KW_LONG";
    KwManages => "manages", "KW_MANAGES";
    KwMap => "map", "KW_MAP";
    KwMirrorport => "mirrorport", "KW_MIRRORPORT";
    KwModule => "module", "KW_MODULE";
    KwMultiple => "multiple", "KW_MULTIPLE";
    KwNative => "native", "KW_NATIVE";
    KwObject => "Object", "KW_OBJECT";
    KwOctet => "octet", "KW_OCTET";
    KwOneway => "oneway", "KW_ONEWAY";
    KwOut => "out", "KW_OUT";
    KwPrimarykey => "primarykey", "KW_PRIMARYKEY";
    KwPrivate => "private", "KW_PRIVATE";
    KwPort => "port", "KW_PORT";
    KwPorttype => "porttype", "KW_PORTTYPE";
    KwProvides => "provides", "KW_PROVIDES";
    KwPublic => "public", "KW_PUBLIC";
    KwPublishes => "publishes", "KW_PUBLISHES";
    KwRaises => "raises", "KW_RAISES";
    KwReadonly => "readonly", "KW_READONLY";
    KwSetraises => "setraises", "KW_SETRAISES";
    KwSequence => "sequence", "KW_SEQUENCE";
    KwShort => "short", "KW_SHORT";
    KwString => "string", "KW_STRING";
    KwStruct => "struct", "KW_STRUCT";
    KwSupports => "supports", "KW_SUPPORTS";
    KwSwitch => "switch", "KW_SWITCH";
    KwTrue => "TRUE", "KW_TRUE";
    KwTruncatable => "truncatable", "KW_TRUNCATABLE";
    KwTypedef => "typedef", "KW_TYPEDEF";
    KwTypeid => "typeid", "KW_TYPEID";
    KwTypename => "typename", "KW_TYPENAME";
    KwTypeprefix => "typeprefix", "KW_TYPEPREFIX";
    KwUnsigned => "unsigned", "KW_UNSIGNED";
    KwUnion => "union", "KW_UNION";
    KwUses => "uses", "KW_USES";
    KwValueBase => "ValueBase", "KW_VALUEBASE";
    KwValuetype => "valuetype", "KW_VALUETYPE";
    KwVoid => "void", "KW_VOID";
    KwWchar => "wchar", "KW_WCHAR";
    KwWstring => "wstring", "KW_WSTRING";
    KwInt8 => "int8", "KW_INT8";
    KwUint8 => "uint8", "KW_UINT8";
    KwInt16 => "int16", "KW_INT16";
    KwInt32 => "int32", "KW_INT32";
    KwInt64 => "int64", "KW_INT64";
    KwUint16 => "uint16", "KW_UINT16";
    KwUint32 => "uint32", "KW_UINT32";
    KwUint64 => "uint64", "KW_UINT64";
}

impl TokenKind {
    /// Returns the keyword spelling or punctuation symbol of this kind.
    ///
    /// Literal kinds, identifiers and the two special kinds return a short
    /// lowercase description instead.
    pub fn as_str(self) -> &'static str {
        if let Some(text) = self.keyword_str() {
            return text;
        }
        match self {
            TokenKind::Illegal => "illegal",
            TokenKind::Eof => "end of input",
            TokenKind::Identifier => "identifier",
            TokenKind::IntegerLiteral => "integer literal",
            TokenKind::FloatingPointLiteral => "floating-point literal",
            TokenKind::CharacterLiteral => "character literal",
            TokenKind::WideCharacterLiteral => "wide character literal",
            TokenKind::StringLiteral => "string literal",
            TokenKind::WideStringLiteral => "wide string literal",
            TokenKind::Semicolon => ";",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::ScopeSeparator => "::",
            TokenKind::Colon => ":",
            TokenKind::Comma => ",",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Lt => "<",
            TokenKind::Gt => ">",
            TokenKind::Shl => "<<",
            TokenKind::Shr => ">>",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Eq => "=",
            TokenKind::Pipe => "|",
            TokenKind::Caret => "^",
            TokenKind::Amp => "&",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Tilde => "~",
            TokenKind::Backslash => "\\",
            TokenKind::At => "@",
            _ => "keyword",
        }
    }

    /// Returns the upper-snake name of this kind, as printed by `idlt`.
    ///
    /// # Example
    ///
    /// ```
    /// use idlc_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::ScopeSeparator.name(), "SCOPE_SEPARATOR");
    /// assert_eq!(TokenKind::KwModule.name(), "KW_MODULE");
    /// ```
    pub fn name(self) -> &'static str {
        if let Some(name) = self.keyword_name() {
            return name;
        }
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::IntegerLiteral => "INTEGER_LITERAL",
            TokenKind::FloatingPointLiteral => "FLOATING_POINT_LITERAL",
            TokenKind::CharacterLiteral => "CHARACTER_LITERAL",
            TokenKind::WideCharacterLiteral => "WIDE_CHARACTER_LITERAL",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::WideStringLiteral => "WIDE_STRING_LITERAL",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::LBrace => "LEFT_BRACE",
            TokenKind::RBrace => "RIGHT_BRACE",
            TokenKind::ScopeSeparator => "SCOPE_SEPARATOR",
            TokenKind::Colon => "COLON",
            TokenKind::Comma => "COMMA",
            TokenKind::LParen => "LEFT_PAREN",
            TokenKind::RParen => "RIGHT_PAREN",
            TokenKind::Lt => "LESS_THAN",
            TokenKind::Gt => "GREATER_THAN",
            TokenKind::Shl => "LEFT_SHIFT",
            TokenKind::Shr => "RIGHT_SHIFT",
            TokenKind::LBracket => "LEFT_BRACKET",
            TokenKind::RBracket => "RIGHT_BRACKET",
            TokenKind::Eq => "EQUAL",
            TokenKind::Pipe => "PIPE",
            TokenKind::Caret => "CARET",
            TokenKind::Amp => "AMPERSAND",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Star => "STAR",
            TokenKind::Slash => "SLASH",
            TokenKind::Percent => "PERCENT",
            TokenKind::Tilde => "TILDE",
            TokenKind::Backslash => "BACKSLASH",
            TokenKind::At => "AT",
            _ => "KEYWORD",
        }
    }

    /// Returns true for reserved keyword kinds.
    pub fn is_keyword(self) -> bool {
        self.keyword_str().is_some()
    }

    /// Returns true for the six literal kinds.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::IntegerLiteral
                | TokenKind::FloatingPointLiteral
                | TokenKind::CharacterLiteral
                | TokenKind::WideCharacterLiteral
                | TokenKind::StringLiteral
                | TokenKind::WideStringLiteral
        )
    }

    /// Finds the keyword that `text` matches only case-insensitively.
    ///
    /// Returns `None` when `text` is an exact keyword or no keyword at all.
    ///
    /// # Example
    ///
    /// ```
    /// use idlc_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::keyword_case_collision("Abstract"), Some(TokenKind::KwAbstract));
    /// assert_eq!(TokenKind::keyword_case_collision("abstract"), None);
    /// assert_eq!(TokenKind::keyword_case_collision("shape"), None);
    /// ```
    pub fn keyword_case_collision(text: &str) -> Option<TokenKind> {
        TokenKind::KEYWORDS.iter().copied().find(|kind| {
            let spelling = kind.as_str();
            spelling != text && spelling.eq_ignore_ascii_case(text)
        })
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A lexical token: kind, text payload and source span.
///
/// The text is the spelling for punctuation, keywords, identifiers and
/// numbers, the decoded value for character and string literals, and the
/// diagnostic message for [`TokenKind::Illegal`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    /// Token classification
    pub kind: TokenKind,
    /// Spelling, decoded value or diagnostic
    pub text: String,
    /// Source range the token was scanned from
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Returns true for the end-of-input token.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Returns true for illegal tokens.
    #[inline]
    pub fn is_illegal(&self) -> bool {
        self.kind == TokenKind::Illegal
    }

    /// Decodes an integer literal's spelling.
    ///
    /// A `0x`/`0X` prefix selects hexadecimal, a leading `0` followed only by
    /// octal digits selects octal, anything else (including `09`) is decimal.
    /// Returns `None` for other kinds and on overflow.
    ///
    /// # Example
    ///
    /// ```
    /// use idlc_lex::tokenize;
    ///
    /// let tokens = tokenize("0xAB 012 42");
    /// assert_eq!(tokens[0].integer_value(), Some(0xAB));
    /// assert_eq!(tokens[1].integer_value(), Some(0o12));
    /// assert_eq!(tokens[2].integer_value(), Some(42));
    /// ```
    pub fn integer_value(&self) -> Option<u64> {
        if self.kind != TokenKind::IntegerLiteral {
            return None;
        }
        let text = self.text.as_str();
        if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
            u64::from_str_radix(hex, 16).ok()
        } else if let Some(octal) = text
            .strip_prefix('0')
            .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| matches!(b, b'0'..=b'7')))
        {
            u64::from_str_radix(octal, 8).ok()
        } else {
            text.parse().ok()
        }
    }
}

impl fmt::Display for Token {
    /// Formats as `KIND 'text'`, escaping control characters in the text.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}'", self.kind.name(), self.text.escape_debug())
    }
}
