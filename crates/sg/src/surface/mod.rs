//! Drawing surfaces and how to find them.
//!
//! A [Document] is the page the scripts run in: a flat list of canvas
//! elements looked up with simple CSS selectors.

mod selector;

use std::fmt::Display;

pub use selector::Selector;

/// Size of a drawing surface, in pixels
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Sizes {
    pub width: u32,
    pub height: u32,
}

impl Sizes {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

impl Default for Sizes {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

impl std::str::FromStr for Sizes {
    type Err = anyhow::Error;

    /// Parse `width`x`height`, eg `800x600`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((width, height)) = s.split_once('x') else {
            return Err(anyhow::anyhow!("incorrect format {s:?}, expected `width`x`height`"));
        };
        Ok(Sizes {
            width: width.trim().parse()?,
            height: height.trim().parse()?,
        })
    }
}

impl Display for Sizes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A `<canvas>` element
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub width: u32,
    pub height: u32,
}

impl Default for Canvas {
    /// A fresh canvas is 300x150, like in a browser
    fn default() -> Self {
        Self {
            id: None,
            classes: Vec::new(),
            width: 300,
            height: 150,
        }
    }
}

impl Canvas {
    pub const TAG: &'static str = "canvas";

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn sizes(&self) -> Sizes {
        Sizes::new(self.width, self.height)
    }

    pub fn matches(&self, selector: &Selector) -> bool {
        selector.tag.as_deref().map_or(true, |tag| tag.eq_ignore_ascii_case(Self::TAG))
            && selector
                .id
                .as_deref()
                .map_or(true, |id| self.id.as_deref() == Some(id))
            && selector
                .classes
                .iter()
                .all(|class| self.classes.contains(class))
    }
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    pub elements: Vec<Canvas>,
}

impl Document {
    /// The page every script expects: a single `<canvas class="webgl">`
    pub fn with_webgl_canvas() -> Self {
        Self {
            elements: vec![Canvas::default().with_class("webgl")],
        }
    }

    pub fn append(&mut self, canvas: Canvas) {
        self.elements.push(canvas);
    }

    /// First element matching `selector` in document order.
    ///
    /// Errors only when the selector can't be parsed; no match is `Ok(None)`.
    pub fn query_selector(&self, selector: &str) -> anyhow::Result<Option<Canvas>> {
        let selector: Selector = selector.parse()?;
        let found = self.elements.iter().find(|e| e.matches(&selector)).cloned();
        if found.is_none() {
            log::debug!("no element matches {selector}");
        }
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::{Canvas, Document, Sizes};

    #[test]
    fn sizes_parse() {
        let sizes: Sizes = "800x600".parse().unwrap();
        assert_eq!(sizes, Sizes::new(800, 600));
        assert_eq!(sizes.to_string(), "800x600");
        assert_eq!(sizes.aspect(), 800.0 / 600.0);
        assert!("800".parse::<Sizes>().is_err());
        assert!("800x".parse::<Sizes>().is_err());
        assert!("-1x3".parse::<Sizes>().is_err());
    }

    #[test]
    fn both_script_selectors_find_the_canvas() {
        let document = Document::with_webgl_canvas();
        for selector in ["canvas.webgl", ".webgl", "canvas", "CANVAS.webgl"] {
            let canvas = document.query_selector(selector).unwrap();
            assert!(canvas.is_some(), "{selector}");
        }
        let canvas = document.query_selector(".webgl").unwrap().unwrap();
        assert_eq!((canvas.width, canvas.height), (300, 150));
    }

    #[test]
    fn missing_element_is_none() {
        let document = Document::with_webgl_canvas();
        assert!(document.query_selector("canvas.webgpu").unwrap().is_none());
        assert!(document.query_selector("div.webgl").unwrap().is_none());
        assert!(document.query_selector("#main").unwrap().is_none());
        assert!(Document::default().query_selector("canvas").unwrap().is_none());
    }

    #[test]
    fn first_match_in_document_order() {
        let mut document = Document::default();
        document.append(Canvas::default().with_class("webgl").with_id("first"));
        document.append(Canvas::default().with_class("webgl").with_id("second"));
        let canvas = document.query_selector("canvas.webgl").unwrap().unwrap();
        assert_eq!(canvas.id.as_deref(), Some("first"));
        let canvas = document.query_selector("canvas#second.webgl").unwrap().unwrap();
        assert_eq!(canvas.id.as_deref(), Some("second"));
    }

    #[test]
    fn invalid_selector_is_an_error() {
        let document = Document::with_webgl_canvas();
        assert!(document.query_selector("").is_err());
        assert!(document.query_selector("body canvas").is_err());
        assert!(document.query_selector("canvas.").is_err());
    }
}
