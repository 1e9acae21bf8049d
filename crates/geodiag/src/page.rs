//! Tutorial page markup and diagram mount points.

use crate::error::{DiagramError, Result};

const TUTORIAL_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Rotating lines and measuring angles</title>
<style>
  .grid { stroke: #e4e4e4; stroke-width: 1; }
  .axis { stroke: #9a9a9a; stroke-width: 1.5; }
  .line { stroke: #1f4e8c; stroke-width: 3; }
  .line.rotatable { cursor: grab; }
  .label { font: 16px sans-serif; }
  .angle-arc { fill: #c0392b; }
  .angle { font: 13px sans-serif; fill: #c0392b; dominant-baseline: middle; }
</style>
</head>
<body>
<h1>Rotating lines and measuring angles</h1>
<p>Drag the line from <em>b</em> to <em>c</em>. The angle it makes with the x-axis follows along.</p>
<div id="example"></div>
<h2>Plotting points</h2>
<p>Two labeled points placed on the grid.</p>
<div id="example_02"></div>
<h2>Rotating a line</h2>
<p>The line can be rotated about <em>b</em>, but the point <em>c</em> does not move with it.</p>
<div id="example_03"></div>
<h2>Keeping points in sync</h2>
<p>Redrawing the points after every move keeps <em>c</em> on the end of the line.</p>
<div id="example_04"></div>
<h2>Annotating the angle</h2>
<p>The arc and the label are recomputed from the current positions on every move.</p>
<div id="example_05"></div>
</body>
</html>
"#;

/// HTML page with `<div id="...">` mount points.
#[derive(Clone, Debug)]
pub struct Page {
    html: String,
}

impl Page {
    pub fn tutorial() -> Self {
        Self::from_template(TUTORIAL_HTML)
    }

    pub fn from_template(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    /// Ids of all elements in the page that carry an `id` attribute.
    pub fn mount_ids(&self) -> Vec<&str> {
        self.id_attrs().map(|(_, id)| id).collect()
    }

    /// Insert `markup` as the first child of the element with id `id`.
    pub fn mount(&mut self, id: &str, markup: &str) -> Result<()> {
        let at = self
            .id_attrs()
            .find(|&(_, found)| found == id)
            .and_then(|(start, _)| self.html[start..].find('>').map(|gt| start + gt + 1))
            .ok_or_else(|| DiagramError::MissingMount(id.to_owned()))?;
        self.html.insert_str(at, markup);
        tracing::debug!(id, bytes = markup.len(), "mounted");
        Ok(())
    }

    /// `id="..."` attributes with the offset of their value. Only a
    /// whitespace-separated `id` counts, not `data-id` and the like.
    fn id_attrs(&self) -> impl Iterator<Item = (usize, &str)> {
        const ATTR: &str = "id=\"";
        self.html
            .match_indices(ATTR)
            .filter(|&(at, _)| {
                self.html[..at]
                    .chars()
                    .next_back()
                    .is_some_and(char::is_whitespace)
            })
            .filter_map(|(at, _)| {
                let start = at + ATTR.len();
                let rest = &self.html[start..];
                rest.split_once('"').map(|(id, _)| (start, id))
            })
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn into_html(self) -> String {
        self.html
    }
}
