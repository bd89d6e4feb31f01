use super::profile::{BlockComment, LanguageProfile, StringDelimiter};

const DOUBLE_QUOTE: &[StringDelimiter] = &[StringDelimiter::quoted("\"")];
const DOUBLE_QUOTE_MULTILINE: &[StringDelimiter] = &[StringDelimiter::quoted("\"").multiline()];
const LISP_BLOCK: &[BlockComment] = &[BlockComment::new("#|", "|#")];

const HASKELL_STYLE: LanguageProfile = LanguageProfile {
    line_comments: &["--"],
    block_comments: &[BlockComment::new("{-", "-}")],
    nestable: true,
    strings: DOUBLE_QUOTE,
    ..LanguageProfile::EMPTY
};

pub(crate) const PROFILES: &[LanguageProfile] = &[
    LanguageProfile {
        name: "haskell",
        extensions: &["hs", "lhs"],
        ..HASKELL_STYLE
    },
    LanguageProfile {
        name: "elm",
        extensions: &["elm"],
        strings: &[
            StringDelimiter::quoted("\"\"\"").multiline(),
            StringDelimiter::quoted("\""),
        ],
        ..HASKELL_STYLE
    },
    LanguageProfile {
        name: "purescript",
        extensions: &["purs"],
        ..HASKELL_STYLE
    },
    LanguageProfile {
        name: "ocaml",
        extensions: &["ml", "mli"],
        line_comments: &[],
        block_comments: &[BlockComment::new("(*", "*)")],
        strings: DOUBLE_QUOTE_MULTILINE,
        ..HASKELL_STYLE
    },
    LanguageProfile {
        name: "fsharp",
        extensions: &["fs", "fsi", "fsx"],
        line_comments: &["//"],
        block_comments: &[BlockComment::new("(*", "*)")],
        strings: &[
            StringDelimiter::raw("\"\"\"", "\"\"\"").multiline(),
            StringDelimiter::quoted("\""),
        ],
        ..HASKELL_STYLE
    },
    LanguageProfile {
        name: "erlang",
        extensions: &["erl", "hrl"],
        line_comments: &["%"],
        block_comments: &[],
        nestable: false,
        strings: DOUBLE_QUOTE_MULTILINE,
        ..HASKELL_STYLE
    },
    LanguageProfile {
        name: "clojure",
        extensions: &["clj", "cljs", "cljc", "edn"],
        line_comments: &[";"],
        block_comments: &[],
        nestable: false,
        strings: DOUBLE_QUOTE_MULTILINE,
        ..HASKELL_STYLE
    },
    LanguageProfile {
        name: "lisp",
        extensions: &["lisp", "lsp", "cl", "el"],
        line_comments: &[";"],
        block_comments: LISP_BLOCK,
        strings: DOUBLE_QUOTE_MULTILINE,
        ..HASKELL_STYLE
    },
    LanguageProfile {
        name: "scheme",
        extensions: &["scm", "ss", "rkt"],
        line_comments: &[";"],
        block_comments: LISP_BLOCK,
        strings: DOUBLE_QUOTE_MULTILINE,
        ..HASKELL_STYLE
    },
    LanguageProfile {
        name: "nix",
        extensions: &["nix"],
        line_comments: &["#"],
        block_comments: &[BlockComment::new("/*", "*/")],
        nestable: false,
        strings: &[
            StringDelimiter::raw("''", "''").multiline(),
            StringDelimiter::quoted("\"").multiline(),
        ],
        ..HASKELL_STYLE
    },
];
