use std::fmt;
use std::path::Path;

const DELIMITER: &str = "---";
const MAX_DESCRIPTION_LEN: usize = 150;
const TRUNCATED_DESCRIPTION_LEN: usize = 147;

/// The metadata block put in front of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontmatter {
    pub title: String,
    pub description: String,
}

impl Frontmatter {
    pub fn derive(path: &Path, content: &str, fallback_description: &str) -> Self {
        Frontmatter {
            title: title_from_path(path),
            description: description_from_content(content, fallback_description),
        }
    }

    pub fn prepend_to(&self, content: &str) -> String {
        format!("{}{}", self, content)
    }
}

impl fmt::Display for Frontmatter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", DELIMITER)?;
        writeln!(f, "title: \"{}\"", escape(&self.title))?;
        writeln!(f, "description: \"{}\"", escape(&self.description))?;
        writeln!(f, "{}", DELIMITER)?;
        writeln!(f)
    }
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

pub fn has_frontmatter(content: &str) -> bool {
    content
        .strip_prefix(DELIMITER)
        .map_or(false, |rest| rest.starts_with('\n') || rest.starts_with("\r\n"))
}

/// `getting-started.md` becomes `Getting Started`.
pub fn title_from_path(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    stem.replace('-', " ")
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The first line of prose in `content`, without emphasis or code markers.
///
/// Headings, images and code fences are not prose. Long lines are cut to
/// 147 characters plus `...`.
pub fn description_from_content(content: &str, fallback: &str) -> String {
    let line = content
        .split('\n')
        .map(str::trim)
        .find(|line| {
            !line.is_empty()
                && !line.starts_with('#')
                && !line.starts_with("![")
                && !line.starts_with("```")
        });

    let description: String = match line {
        Some(line) => line.chars().filter(|c| *c != '*' && *c != '`').collect(),
        None => String::new(),
    };

    if description.is_empty() {
        return fallback.to_owned();
    }

    if description.chars().count() > MAX_DESCRIPTION_LEN {
        let mut truncated: String = description.chars().take(TRUNCATED_DESCRIPTION_LEN).collect();
        truncated.push_str("...");
        truncated
    } else {
        description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FALLBACK: &str = "Documentation";

    #[test]
    fn detects_leading_delimiter_line() {
        assert!(has_frontmatter("---\ntitle: \"A\"\n---\n"));
        assert!(has_frontmatter("---\r\ntitle: \"A\"\r\n---\r\n"));
        assert!(!has_frontmatter("# Title\n---\n"));
        assert!(!has_frontmatter("----\n"));
        assert!(!has_frontmatter("---"));
        assert!(!has_frontmatter(""));
    }

    #[test]
    fn title_is_derived_from_the_file_name() {
        assert_eq!(
            title_from_path(Path::new("docs/getting-started.md")),
            "Getting Started"
        );
        assert_eq!(title_from_path(Path::new("api-v2-reference.md")), "Api V2 Reference");
        assert_eq!(title_from_path(Path::new("faq.md")), "Faq");
        assert_eq!(title_from_path(Path::new("already Spaced.md")), "Already Spaced");
        assert_eq!(title_from_path(Path::new("über-uns.md")), "Über Uns");
    }

    #[test]
    fn description_skips_headings() {
        assert_eq!(
            description_from_content("# Heading\n\nActual text here.", FALLBACK),
            "Actual text here."
        );
    }

    #[test]
    fn description_skips_images_and_fences() {
        let content = "## Setup\n![logo](logo.png)\n```bash\n  Run **the** `install` *now*.  \n";
        assert_eq!(
            description_from_content(content, FALLBACK),
            "Run the install now."
        );
    }

    #[test]
    fn description_falls_back_without_prose() {
        assert_eq!(description_from_content("", FALLBACK), FALLBACK);
        assert_eq!(description_from_content("# Only\n\n## Headings\n", FALLBACK), FALLBACK);
        assert_eq!(description_from_content("**\n", FALLBACK), FALLBACK);
    }

    #[test]
    fn long_descriptions_are_truncated() {
        let line = "a".repeat(200);
        let description = description_from_content(&line, FALLBACK);
        assert_eq!(description.chars().count(), 150);
        assert_eq!(description, format!("{}...", "a".repeat(147)));

        let exact = "b".repeat(150);
        assert_eq!(description_from_content(&exact, FALLBACK), exact);
    }

    #[test]
    fn truncation_counts_characters() {
        let line = "é".repeat(151);
        let description = description_from_content(&line, FALLBACK);
        assert_eq!(description, format!("{}...", "é".repeat(147)));
    }

    #[test]
    fn renders_the_block() {
        let frontmatter = Frontmatter {
            title: "Getting Started".to_owned(),
            description: "Say \"hi\".".to_owned(),
        };
        assert_eq!(
            frontmatter.prepend_to("# Body\n"),
            "---\ntitle: \"Getting Started\"\ndescription: \"Say \\\"hi\\\".\"\n---\n\n# Body\n"
        );
    }
}
