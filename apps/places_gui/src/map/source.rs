use walkers::sources::{Attribution, TileSource};
use walkers::TileId;

/// Raster tiles addressed by a `{s}`/`{z}`/`{x}`/`{y}` URL template.
#[derive(Debug, Clone)]
pub struct TemplateTiles {
    template: String,
    subdomains: Vec<String>,
    attribution: &'static str,
}

impl TemplateTiles {
    pub fn new(
        template: impl Into<String>,
        subdomains: Vec<String>,
        attribution: impl Into<String>,
    ) -> Self {
        // walkers keeps attribution text as 'static; one source lives for the whole session.
        let attribution: &'static str = Box::leak(attribution.into().into_boxed_str());
        Self {
            template: template.into(),
            subdomains,
            attribution,
        }
    }

    pub fn attribution_text(&self) -> &'static str {
        self.attribution
    }
}

impl TileSource for TemplateTiles {
    fn tile_url(&self, tile_id: TileId) -> String {
        let url = self
            .template
            .replace("{z}", &tile_id.zoom.to_string())
            .replace("{x}", &tile_id.x.to_string())
            .replace("{y}", &tile_id.y.to_string());
        if self.subdomains.is_empty() {
            return url;
        }
        let idx = (tile_id.x as usize + tile_id.y as usize) % self.subdomains.len();
        url.replace("{s}", &self.subdomains[idx])
    }

    fn attribution(&self) -> Attribution {
        Attribution {
            text: self.attribution,
            url: "",
            logo_light: None,
            logo_dark: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn osm() -> TemplateTiles {
        TemplateTiles::new(
            "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
            vec!["a".into(), "b".into(), "c".into()],
            "© OpenStreetMap contributors",
        )
    }

    #[test]
    fn fills_template_and_rotates_subdomains() {
        let source = osm();
        assert_eq!(
            source.tile_url(TileId { x: 4, y: 2, zoom: 3 }),
            "https://a.tile.openstreetmap.org/3/4/2.png"
        );
        assert_eq!(
            source.tile_url(TileId { x: 1, y: 0, zoom: 1 }),
            "https://b.tile.openstreetmap.org/1/1/0.png"
        );
        assert_eq!(
            source.tile_url(TileId { x: 1, y: 1, zoom: 1 }),
            "https://c.tile.openstreetmap.org/1/1/1.png"
        );
    }

    #[test]
    fn template_without_subdomains_is_used_verbatim() {
        let source = TemplateTiles::new("https://tiles.example/{z}/{x}/{y}.png", Vec::new(), "x");
        assert_eq!(
            source.tile_url(TileId { x: 7, y: 9, zoom: 5 }),
            "https://tiles.example/5/7/9.png"
        );
    }

    #[test]
    fn reports_configured_attribution() {
        let source = osm();
        assert_eq!(source.attribution().text, "© OpenStreetMap contributors");
        assert_eq!(source.attribution_text(), "© OpenStreetMap contributors");
    }
}
