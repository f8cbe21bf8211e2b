//! C and C++.
//!
//! C++ reuses the C tables and adds its own words on top.

use tinc_lex::{LanguageSpec, ScanResult};

const C_KEYWORDS: &[&str] = &[
    "auto", "break", "case", "const", "continue", "default", "do", "else", "enum", "extern",
    "for", "goto", "if", "inline", "register", "restrict", "return", "sizeof", "static",
    "struct", "switch", "typedef", "union", "volatile", "while", "_Alignas", "_Alignof",
    "_Atomic", "_Bool", "_Complex", "_Generic", "_Imaginary", "_Noreturn", "_Static_assert",
    "_Thread_local", "NULL", "true", "false",
];

const C_TYPES: &[&str] = &[
    "char", "double", "float", "int", "long", "short", "signed", "unsigned", "void", "bool",
    "size_t", "ssize_t", "ptrdiff_t", "wchar_t", "int8_t", "int16_t", "int32_t", "int64_t",
    "uint8_t", "uint16_t", "uint32_t", "uint64_t", "intptr_t", "uintptr_t", "FILE",
];

const CPP_KEYWORDS: &[&str] = &[
    "alignas", "alignof", "and", "and_eq", "asm", "bitand", "bitor", "catch", "class", "compl",
    "concept", "consteval", "constexpr", "constinit", "const_cast", "co_await", "co_return",
    "co_yield", "decltype", "delete", "dynamic_cast", "explicit", "export", "final", "friend",
    "mutable", "namespace", "new", "noexcept", "not", "not_eq", "nullptr", "operator", "or",
    "or_eq", "override", "private", "protected", "public", "reinterpret_cast", "requires",
    "static_assert", "static_cast", "template", "this", "thread_local", "throw", "try",
    "typeid", "typename", "using", "virtual", "xor", "xor_eq",
];

const CPP_TYPES: &[&str] = &["char8_t", "char16_t", "char32_t", "string", "nullptr_t"];

const OPERATOR_START: &str = "+-*/%=!<>&|^~?:";
const OPERATOR_CONTINUE: &str = "=<>&|+-:";
const PUNCTUATION: &str = "(){}[];,.";
const NUMBER_CHARS: &str = ".xXabcdefABCDEFuUlLpP";

/// C: `#` directives, hex floats and integer suffixes.
pub fn c() -> ScanResult<LanguageSpec> {
    LanguageSpec::builder("c")
        .extensions(["c", "h"])
        .keywords(C_KEYWORDS.iter().copied())
        .types(C_TYPES.iter().copied())
        .operators(OPERATOR_START, OPERATOR_CONTINUE)
        .punctuation(PUNCTUATION)
        .number_chars(NUMBER_CHARS)
        .directive_marker('#')
        .build()
}

/// C++: the C tables plus C++ keywords and character types.
pub fn cpp() -> ScanResult<LanguageSpec> {
    LanguageSpec::builder("cpp")
        .aliases(["c++", "cxx", "cc"])
        .extensions(["cpp", "cc", "cxx", "hpp", "hh", "hxx"])
        .keywords(C_KEYWORDS.iter().chain(CPP_KEYWORDS).copied())
        .types(C_TYPES.iter().chain(CPP_TYPES).copied())
        .operators(OPERATOR_START, OPERATOR_CONTINUE)
        .punctuation(PUNCTUATION)
        .number_chars(NUMBER_CHARS)
        .directive_marker('#')
        .build()
}
