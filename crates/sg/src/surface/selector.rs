use std::{fmt::Display, str::FromStr};

use anyhow::{bail, ensure};

/// A compound selector: `tag`, `.class`, `#id` or any concatenation like `canvas#main.webgl`.
///
/// Combinators (descendant, child...) are not supported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

impl FromStr for Selector {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ensure!(!s.is_empty(), "empty selector");

        let mut selector = Selector::default();
        let tag_end = s.find(|c: char| !is_ident_char(c)).unwrap_or(s.len());
        if tag_end > 0 {
            selector.tag = Some(s[..tag_end].to_owned());
        }

        let mut rest = &s[tag_end..];
        while let Some(marker) = rest.chars().next() {
            let tail = &rest[marker.len_utf8()..];
            let end = tail.find(|c: char| !is_ident_char(c)).unwrap_or(tail.len());
            let ident = &tail[..end];
            ensure!(!ident.is_empty(), "invalid selector {s:?}: expected a name after {marker:?}");
            match marker {
                '.' => selector.classes.push(ident.to_owned()),
                '#' if selector.id.is_none() => selector.id = Some(ident.to_owned()),
                '#' => bail!("invalid selector {s:?}: more than one id"),
                c => bail!("invalid selector {s:?}: unsupported character {c:?}"),
            }
            rest = &tail[end..];
        }

        Ok(selector)
    }
}

impl Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(tag) = &self.tag {
            f.write_str(tag)?;
        }
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Selector;

    #[test]
    fn compound() {
        let selector: Selector = "canvas#main.webgl.big".parse().unwrap();
        assert_eq!(selector.tag.as_deref(), Some("canvas"));
        assert_eq!(selector.id.as_deref(), Some("main"));
        assert_eq!(selector.classes, ["webgl", "big"]);
        assert_eq!(selector.to_string(), "canvas#main.webgl.big");
    }

    #[test]
    fn class_only() {
        let selector: Selector = ".webgl".parse().unwrap();
        assert_eq!(selector.tag, None);
        assert_eq!(selector.classes, ["webgl"]);
    }

    #[test]
    fn rejected() {
        for s in ["", "  ", "canvas .webgl", "canvas > div", "#a#b", ".", "canvas[width]"] {
            assert!(s.parse::<Selector>().is_err(), "{s:?}");
        }
    }
}
