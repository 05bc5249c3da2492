use logos::Logos;

#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    // Comments and horizontal whitespace (skipped; newlines are significant)
    #[regex(r"//[^\n]*", logos::skip)]
    #[regex(r"[ \t\r]+", logos::skip)]
    Comment,

    #[token("\n")]
    Newline,

    // Operators
    #[token("=>")]
    Arrow,

    #[token("=")]
    Equals,

    #[token("@")]
    At,

    // Literals
    #[regex(r"[0-9]+(\.[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),

    #[regex(r#""[^"\n]*""#, |lex| {
        let s = lex.slice();
        s[1..s.len() - 1].to_string()
    })]
    Quoted(String),

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Ident(String),
}
