//! JavaScript identifier rules for import bindings.

/// Words that cannot be used as a binding in an ES module.
const RESERVED_WORDS: &[&str] = &[
    "await",
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "if",
    "implements",
    "import",
    "in",
    "instanceof",
    "interface",
    "let",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "static",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
];

/// Names that strict code cannot bind. ES modules are always strict.
const STRICT_RESTRICTED: &[&str] = &["arguments", "eval"];

/// Bindings the generated route file declares itself.
const GENERATED_BINDINGS: &[&str] = &["mtype", "routes", "moduleInfo"];

pub fn is_reserved(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Check that `name` can be used as an import binding in a generated route
/// file. Returns `Some(reason)` when it cannot.
pub fn binding_error(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Some("binding cannot be empty");
    };

    if !(first.is_alphabetic() || first == '_' || first == '$') {
        return Some("binding must start with a letter, '_' or '$'");
    }

    if !chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$') {
        return Some("binding may only contain letters, digits, '_' and '$'");
    }

    if is_reserved(name) {
        return Some("binding is a reserved word");
    }

    if STRICT_RESTRICTED.contains(&name) {
        return Some("binding is not allowed in strict mode");
    }

    if GENERATED_BINDINGS.contains(&name) {
        return Some("binding collides with a generated export");
    }

    None
}

/// Import specifier for a component path, relative to the module directory
/// unless it is already relative, absolute or aliased.
pub fn import_specifier(component: &str) -> String {
    if component.starts_with('.') || component.starts_with('/') || component.starts_with('@') {
        component.to_string()
    } else {
        format!("./{}", component)
    }
}
