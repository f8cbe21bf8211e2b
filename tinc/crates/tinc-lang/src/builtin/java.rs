//! Java.

use tinc_lex::{LanguageSpec, ScanResult};

const KEYWORDS: &[&str] = &[
    "abstract", "assert", "break", "case", "catch", "class", "const", "continue", "default",
    "do", "else", "enum", "extends", "final", "finally", "for", "goto", "if", "implements",
    "import", "instanceof", "interface", "native", "new", "package", "permits", "private",
    "protected", "public", "record", "return", "sealed", "static", "strictfp", "super",
    "switch", "synchronized", "this", "throw", "throws", "transient", "try", "var", "volatile",
    "while", "yield", "true", "false", "null",
];

const TYPES: &[&str] = &[
    "boolean", "byte", "char", "double", "float", "int", "long", "short", "void", "String",
    "Object", "Integer", "Long", "Double", "Float", "Boolean", "Character", "Byte", "Short",
];

/// Java: `@` annotations are punctuation followed by a name, `$` is a word
/// character.
pub fn language() -> ScanResult<LanguageSpec> {
    LanguageSpec::builder("java")
        .extensions(["java"])
        .keywords(KEYWORDS.iter().copied())
        .types(TYPES.iter().copied())
        .operators("+-*/%=!<>&|^~?:", "=<>&|+-:")
        .punctuation("(){}[];,.@")
        .number_chars(".xXabcdefABCDEFlL_")
        .ident_extra("$")
        .build()
}
