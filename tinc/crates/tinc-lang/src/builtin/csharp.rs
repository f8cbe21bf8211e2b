//! C#.

use tinc_lex::{LanguageSpec, ScanResult};

const KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "break", "case", "catch", "checked", "class", "const", "continue",
    "default", "delegate", "do", "else", "enum", "event", "explicit", "extern", "false",
    "finally", "fixed", "for", "foreach", "goto", "if", "implicit", "in", "interface",
    "internal", "is", "lock", "namespace", "new", "null", "operator", "out", "override",
    "params", "private", "protected", "public", "readonly", "ref", "return", "sealed", "sizeof",
    "stackalloc", "static", "struct", "switch", "this", "throw", "true", "try", "typeof",
    "unchecked", "unsafe", "using", "virtual", "void", "volatile", "while",
    // contextual
    "add", "alias", "and", "async", "await", "by", "descending", "equals", "from", "get",
    "global", "group", "init", "into", "join", "let", "nameof", "not", "on", "or", "orderby",
    "partial", "record", "remove", "required", "select", "set", "value", "var", "when", "where",
    "with", "yield",
];

const TYPES: &[&str] = &[
    "bool", "byte", "char", "decimal", "double", "dynamic", "float", "int", "long", "nint",
    "nuint", "object", "sbyte", "short", "string", "uint", "ulong", "ushort",
];

/// C#: `#` directives, `@` verbatim identifiers, `m`/`u`/`l` suffixes.
pub fn language() -> ScanResult<LanguageSpec> {
    LanguageSpec::builder("csharp")
        .aliases(["cs", "c#"])
        .extensions(["cs", "csx"])
        .keywords(KEYWORDS.iter().copied())
        .types(TYPES.iter().copied())
        .operators("+-*/%=!<>&|^~?:", "=<>&|+-?:")
        .punctuation("(){}[];,.")
        .number_chars(".xXabcdefABCDEFuUlLmM_")
        .directive_marker('#')
        .verbatim_prefix('@')
        .build()
}
