#[cfg(test)]
mod tests {
    use crate::tools::page::read_sections;
    use crate::types::{HydrateConfig, MediaType, Source};

    #[test]
    fn test_read_sections_basic() {
        let html = r#"
            <html><body>
                <div id="charts">
                    <section class="row" id="films-in" data-source="tudum" data-region="india" data-type="films">
                        <h2>Top Films</h2>
                        <div class="content-carousel"></div>
                    </section>
                    <section class="row" data-source="flixpatrol" data-region="Brazil" data-type="TV">
                        <div class="content-carousel"></div>
                    </section>
                </div>
            </body></html>
        "#;

        let sections = read_sections(html, &HydrateConfig::default());
        assert_eq!(sections.len(), 2);

        assert_eq!(sections[0].label, "films-in");
        assert_eq!(sections[0].source, Source::Primary);
        assert_eq!(sections[0].region, "india");
        assert_eq!(sections[0].media_type, MediaType::Films);
        assert!(sections[0].has_target);

        assert_eq!(sections[1].label, "section-2");
        assert_eq!(sections[1].source, Source::Fallback);
        assert_eq!(sections[1].region, "Brazil");
        assert_eq!(sections[1].media_type, MediaType::Tv);
    }

    #[test]
    fn test_read_sections_defaults() {
        let html = r#"<div id="charts"><div class="row" data-region=" "></div></div>"#;
        let cfg = HydrateConfig {
            default_region: "japan".into(),
            ..HydrateConfig::default()
        };
        let sections = read_sections(html, &cfg);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].source, Source::Primary);
        assert_eq!(sections[0].region, "japan");
        assert_eq!(sections[0].media_type, MediaType::Films);
        assert!(!sections[0].has_target);
    }

    #[test]
    fn test_read_sections_ignores_rows_outside_charts() {
        let html = r#"
            <div class="row" data-region="spain"></div>
            <div id="charts"></div>
        "#;
        assert!(read_sections(html, &HydrateConfig::default()).is_empty());
    }

    #[test]
    fn test_read_sections_no_container() {
        assert!(read_sections("", &HydrateConfig::default()).is_empty());
    }
}
