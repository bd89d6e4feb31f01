use super::profile::{BlockComment, LanguageProfile, StringDelimiter};

// Markup text is full of apostrophes, so these profiles declare no strings and
// only the comment block is recognised.
const SGML_STYLE: LanguageProfile = LanguageProfile {
    block_comments: &[BlockComment::new("<!--", "-->")],
    ..LanguageProfile::EMPTY
};

const QUOTES: &[StringDelimiter] = &[
    StringDelimiter::quoted("\""),
    StringDelimiter::quoted("'"),
];

pub(crate) const PROFILES: &[LanguageProfile] = &[
    LanguageProfile {
        name: "html",
        extensions: &["html", "htm", "xhtml", "vue", "svelte"],
        ..SGML_STYLE
    },
    LanguageProfile {
        name: "xml",
        extensions: &[
            "xml", "svg", "xaml", "xsd", "xsl", "xslt", "wsdl", "rss", "atom", "opml", "gpx",
            "kml", "plist", "xib", "storyboard", "xlf", "xliff", "csproj", "vbproj", "fsproj",
            "vcxproj", "props", "targets", "nuspec", "resx", "settings", "manifest", "config",
        ],
        ..SGML_STYLE
    },
    LanguageProfile {
        name: "markdown",
        extensions: &["md", "markdown"],
        ..SGML_STYLE
    },
    LanguageProfile {
        name: "twig",
        extensions: &["twig"],
        block_comments: &[BlockComment::new("{#", "#}")],
        ..LanguageProfile::EMPTY
    },
    LanguageProfile {
        name: "json",
        extensions: &["json"],
        strings: &[StringDelimiter::quoted("\"")],
        ..LanguageProfile::EMPTY
    },
    LanguageProfile {
        name: "yaml",
        extensions: &["yaml", "yml"],
        line_comments: &["#"],
        strings: QUOTES,
        word_start_comments: true,
        ..LanguageProfile::EMPTY
    },
    LanguageProfile {
        name: "toml",
        extensions: &["toml"],
        line_comments: &["#"],
        strings: &[
            StringDelimiter::quoted("\"\"\"").multiline(),
            StringDelimiter::raw("'''", "'''").multiline(),
            StringDelimiter::quoted("\""),
            StringDelimiter::raw("'", "'"),
        ],
        ..LanguageProfile::EMPTY
    },
    LanguageProfile {
        name: "ini",
        extensions: &["ini", "cfg", "inf", "editorconfig"],
        filenames: &[".editorconfig", ".gitconfig"],
        line_comments: &[";", "#"],
        strings: QUOTES,
        ..LanguageProfile::EMPTY
    },
    LanguageProfile {
        name: "conf",
        extensions: &["conf", "properties"],
        filenames: &[".gitignore", ".dockerignore"],
        line_comments: &["#"],
        strings: QUOTES,
        word_start_comments: true,
        ..LanguageProfile::EMPTY
    },
    LanguageProfile {
        name: "graphql",
        extensions: &["graphql", "gql"],
        line_comments: &["#"],
        strings: &[
            StringDelimiter::quoted("\"\"\"").multiline(),
            StringDelimiter::quoted("\""),
        ],
        ..LanguageProfile::EMPTY
    },
];
