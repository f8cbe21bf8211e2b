//! JavaScript and TypeScript.

use tinc_lex::{LanguageSpec, ScanResult};

const JS_KEYWORDS: &[&str] = &[
    "async", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "export", "extends", "finally", "for", "from",
    "function", "get", "if", "import", "in", "instanceof", "let", "new", "of", "return", "set",
    "static", "super", "switch", "this", "throw", "try", "typeof", "var", "void", "while",
    "with", "yield", "null", "undefined", "true", "false", "NaN", "Infinity",
];

const JS_TYPES: &[&str] = &[
    "Array", "BigInt", "Boolean", "Date", "Error", "Function", "JSON", "Map", "Math", "Number",
    "Object", "Promise", "Proxy", "Reflect", "RegExp", "Set", "String", "Symbol", "WeakMap",
    "WeakSet",
];

const TS_KEYWORDS: &[&str] = &[
    "abstract", "as", "asserts", "declare", "enum", "implements", "infer", "interface", "is",
    "keyof", "module", "namespace", "override", "private", "protected", "public", "readonly",
    "require", "satisfies", "type", "unique",
];

const TS_TYPES: &[&str] = &[
    "any", "bigint", "boolean", "never", "number", "object", "string", "symbol", "unknown",
];

const OPERATOR_START: &str = "+-*/%=!<>&|^~?:";
const OPERATOR_CONTINUE: &str = "=<>&|+-*?";
const PUNCTUATION: &str = "(){}[];,.";
// `n` for BigInt, `o`/`b` radix markers
const NUMBER_CHARS: &str = ".xXoObBabcdefABCDEFn_";

/// JavaScript: no directives, `$` is a word character.
pub fn javascript() -> ScanResult<LanguageSpec> {
    LanguageSpec::builder("javascript")
        .aliases(["js", "node"])
        .extensions(["js", "mjs", "cjs", "jsx"])
        .keywords(JS_KEYWORDS.iter().copied())
        .types(JS_TYPES.iter().copied())
        .operators(OPERATOR_START, OPERATOR_CONTINUE)
        .punctuation(PUNCTUATION)
        .number_chars(NUMBER_CHARS)
        .ident_extra("$")
        .build()
}

/// TypeScript: JavaScript plus type-level words and primitive type names.
pub fn typescript() -> ScanResult<LanguageSpec> {
    LanguageSpec::builder("typescript")
        .aliases(["ts"])
        .extensions(["ts", "tsx", "mts", "cts"])
        .keywords(JS_KEYWORDS.iter().chain(TS_KEYWORDS).copied())
        .types(JS_TYPES.iter().chain(TS_TYPES).copied())
        .operators(OPERATOR_START, OPERATOR_CONTINUE)
        .punctuation(PUNCTUATION)
        .number_chars(NUMBER_CHARS)
        .ident_extra("$")
        .build()
}
