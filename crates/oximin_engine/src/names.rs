//! Short-name generation shared by variable and property mangling.

/// Name characters in the order they are handed out. The first 54 may start
/// an identifier; digits only appear after the first character.
const NAME_CHARS: &[u8; 64] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ$_0123456789";
const LEADING_CHARS: usize = 54;

/// The `index`-th short name: `a`..`_`, then `aa`, `ba`, ...
pub(crate) fn base54(index: usize) -> String {
    let mut name = String::with_capacity(2);
    let mut n = index + 1;
    let mut base = LEADING_CHARS;
    loop {
        n -= 1;
        name.push(NAME_CHARS[n % base] as char);
        n /= base;
        base = NAME_CHARS.len();
        if n == 0 {
            return name;
        }
    }
}

/// Words that can never be used as a generated binding name.
pub(crate) fn is_reserved_word(name: &str) -> bool {
    matches!(
        name,
        "do" | "if"
            | "in"
            | "of"
            | "for"
            | "let"
            | "new"
            | "try"
            | "var"
            | "NaN"
            | "case"
            | "else"
            | "enum"
            | "eval"
            | "null"
            | "this"
            | "true"
            | "void"
            | "with"
            | "async"
            | "await"
            | "break"
            | "catch"
            | "class"
            | "const"
            | "false"
            | "super"
            | "throw"
            | "while"
            | "yield"
            | "delete"
            | "export"
            | "import"
            | "public"
            | "return"
            | "static"
            | "switch"
            | "typeof"
            | "default"
            | "extends"
            | "finally"
            | "package"
            | "private"
            | "continue"
            | "debugger"
            | "function"
            | "Infinity"
            | "arguments"
            | "interface"
            | "protected"
            | "undefined"
            | "implements"
            | "instanceof"
    )
}

/// Hands out base54 names in order, skipping reserved words and anything the
/// caller reports as taken.
pub(crate) struct NameGenerator {
    counter: usize,
}

impl NameGenerator {
    pub(crate) fn new() -> Self {
        Self { counter: 0 }
    }

    pub(crate) fn starting_at(counter: usize) -> Self {
        Self { counter }
    }

    /// Next counter value that has not been handed out.
    pub(crate) fn counter(&self) -> usize {
        self.counter
    }

    pub(crate) fn next_free(&mut self, is_taken: impl Fn(&str) -> bool) -> String {
        loop {
            let candidate = base54(self.counter);
            self.counter += 1;
            if !is_reserved_word(&candidate) && !is_taken(&candidate) {
                return candidate;
            }
        }
    }
}
