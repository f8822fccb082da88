//! Open-file tabs and line tokenization for the read-only editor pane.

use crate::project::{file_content, Language};

#[derive(Debug, Clone, PartialEq, Eq)]
/// A file open in a tab.
pub struct OpenFile {
    /// Absolute path, unique per tab.
    pub path: String,
    /// Tab label.
    pub name: String,
    /// Full text.
    pub content: String,
    /// File language.
    pub language: Language,
}

impl OpenFile {
    /// Number of lines shown in the gutter.
    pub fn line_count(&self) -> usize {
        self.content.split('\n').count()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Ordered tabs with at most one active.
pub struct EditorTabs {
    files: Vec<OpenFile>,
    active: Option<String>,
}

impl EditorTabs {
    /// Open tabs in order.
    pub fn files(&self) -> &[OpenFile] {
        &self.files
    }

    /// The active tab, if any.
    pub fn active(&self) -> Option<&OpenFile> {
        let active = self.active.as_deref()?;
        self.files.iter().find(|file| file.path == active)
    }

    /// Whether the tab for `path` is active.
    pub fn is_active(&self, path: &str) -> bool {
        self.active.as_deref() == Some(path)
    }

    /// Opens `path` in a new tab, or focuses the existing one.
    pub fn open(&mut self, path: &str, name: &str, language: Language) {
        if !self.files.iter().any(|file| file.path == path) {
            self.files.push(OpenFile {
                path: path.to_string(),
                name: name.to_string(),
                content: file_content(path),
                language,
            });
        }
        self.active = Some(path.to_string());
    }

    /// Focuses an already open tab.
    pub fn activate(&mut self, path: &str) {
        if self.files.iter().any(|file| file.path == path) {
            self.active = Some(path.to_string());
        }
    }

    /// Closes a tab. Closing the active tab focuses the tab that slid into its slot, or the new
    /// last tab.
    pub fn close(&mut self, path: &str) {
        let Some(index) = self.files.iter().position(|file| file.path == path) else {
            return;
        };
        self.files.remove(index);
        if self.files.is_empty() {
            self.active = None;
        } else if self.is_active(path) {
            let next = index.min(self.files.len() - 1);
            self.active = Some(self.files[next].path.clone());
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Highlight class of a token.
pub enum TokenKind {
    /// Plain text.
    Plain,
    /// Reserved word.
    Keyword,
    /// Quoted string literal.
    String,
    /// Line comment through end of line.
    Comment,
}

impl TokenKind {
    /// CSS class for the token span.
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Plain => "tok-plain",
            Self::Keyword => "tok-keyword",
            Self::String => "tok-string",
            Self::Comment => "tok-comment",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A highlighted run of text.
pub struct Token {
    /// Highlight class.
    pub kind: TokenKind,
    /// Source text.
    pub text: String,
}

const KEYWORDS: [&str; 24] = [
    "import",
    "export",
    "from",
    "const",
    "let",
    "var",
    "function",
    "return",
    "if",
    "else",
    "for",
    "while",
    "class",
    "interface",
    "type",
    "extends",
    "implements",
    "new",
    "this",
    "super",
    "async",
    "await",
    "try",
    "catch",
];

fn push_token(tokens: &mut Vec<Token>, kind: TokenKind, text: &str) {
    if text.is_empty() {
        return;
    }
    match tokens.last_mut() {
        Some(last) if last.kind == kind => last.text.push_str(text),
        _ => tokens.push(Token {
            kind,
            text: text.to_string(),
        }),
    }
}

/// Splits one line into highlight tokens. Non-script languages yield a single plain token.
pub fn tokenize_line(line: &str, language: Language) -> Vec<Token> {
    let mut tokens = Vec::new();
    if !language.is_script() {
        push_token(&mut tokens, TokenKind::Plain, line);
        return tokens;
    }

    let mut rest = line;
    while !rest.is_empty() {
        if rest.starts_with("//") {
            push_token(&mut tokens, TokenKind::Comment, rest);
            break;
        }
        let Some(first) = rest.chars().next() else {
            break;
        };
        if matches!(first, '"' | '\'' | '`') {
            let close = rest[1..].find(first).map(|idx| idx + 2);
            let end = close.unwrap_or(rest.len());
            push_token(&mut tokens, TokenKind::String, &rest[..end]);
            rest = &rest[end..];
            continue;
        }
        if first.is_alphanumeric() || first == '_' {
            let end = rest
                .find(|c: char| !(c.is_alphanumeric() || c == '_'))
                .unwrap_or(rest.len());
            let word = &rest[..end];
            let kind = if KEYWORDS.contains(&word) {
                TokenKind::Keyword
            } else {
                TokenKind::Plain
            };
            push_token(&mut tokens, kind, word);
            rest = &rest[end..];
            continue;
        }
        let width = first.len_utf8();
        push_token(&mut tokens, TokenKind::Plain, &rest[..width]);
        rest = &rest[width..];
    }
    tokens
}
