use crate::style::{DepthBucket, DepthScale};
use crate::ui::elements::Position;
use serde::{Deserialize, Serialize};

/// One swatch of the depth legend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub color: String,
    /// `-10–10`, `10–30`, ..., `90+`
    pub label: String,
}

impl From<&DepthBucket> for LegendEntry {
    fn from(bucket: &DepthBucket) -> Self {
        Self {
            color: bucket.color.clone(),
            label: bucket.label(),
        }
    }
}

/// Depth legend control.
///
/// Built from the same [`DepthScale`] that colors the markers, so a swatch
/// always matches the markers in its range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub position: Position,
    pub title: Option<String>,
    entries: Vec<LegendEntry>,
}

impl Legend {
    pub fn new(scale: &DepthScale, position: Position) -> Self {
        Self {
            position,
            title: None,
            entries: scale.buckets().iter().map(LegendEntry::from).collect(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn entries(&self) -> &[LegendEntry] {
        &self.entries
    }

    /// Leaflet-style legend markup: one inline swatch and range per line
    pub fn to_html(&self) -> String {
        let mut html = String::from("<div class=\"info legend\">");
        if let Some(title) = &self.title {
            html.push_str(&format!("<h4>{}</h4>", crate::ui::popup::escape_html(title)));
        }
        for entry in &self.entries {
            html.push_str(&format!(
                "<i style=\"background: {}; width: 15px; height: 15px; display: inline-block;\"></i> {}",
                entry.color,
                entry.label.replace('\u{2013}', "&ndash;")
            ));
            if !entry.label.ends_with('+') {
                html.push_str("<br>");
            }
        }
        html.push_str("</div>");
        html
    }
}

impl Default for Legend {
    fn default() -> Self {
        Self::new(&DepthScale::earthquake(), Position::BottomRight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::legend_buckets;

    #[test]
    fn test_legend_entries_follow_buckets() {
        let legend = Legend::default();
        let buckets = legend_buckets();

        assert_eq!(legend.entries().len(), buckets.len());
        for (entry, bucket) in legend.entries().iter().zip(&buckets) {
            assert_eq!(entry.color, bucket.color);
        }
        assert_eq!(legend.entries()[0].label, "-10–10");
        assert_eq!(legend.entries()[5].label, "90+");
    }

    #[test]
    fn test_legend_html() {
        let html = Legend::default().to_html();

        assert!(html.starts_with("<div class=\"info legend\">"));
        assert!(html.ends_with("90+</div>"));
        assert_eq!(html.matches("<i style=").count(), 6);
        assert_eq!(html.matches("<br>").count(), 5);
        assert!(html.contains("background: #7CFC00;"));
        assert!(html.contains("-10&ndash;10<br>"));
    }

    #[test]
    fn test_legend_title_is_escaped() {
        let html = Legend::default().with_title("Depth <km>").to_html();
        assert!(html.contains("<h4>Depth &lt;km&gt;</h4>"));
    }
}
