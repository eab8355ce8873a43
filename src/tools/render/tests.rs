#[cfg(test)]
mod tests {
    use crate::tools::render::*;
    use crate::types::ChartEntry;

    #[test]
    fn test_render_empty_shows_single_message() {
        let mut carousel = Carousel::new();
        render(&mut carousel, &[]);
        assert_eq!(carousel.children.len(), 1);
        assert_eq!(carousel.message(), Some(NO_DATA_MESSAGE));
        assert_eq!(carousel.items().count(), 0);
        assert!(!carousel.to_html().contains("<img"));
    }

    #[test]
    fn test_render_replaces_previous_children() {
        let mut carousel = Carousel::new();
        render(&mut carousel, &[ChartEntry::new("Old").with_rank(1)]);
        carousel.show_message("stale");
        render(&mut carousel, &[ChartEntry::new("New").with_rank(2)]);
        assert_eq!(carousel.children.len(), 1);
        assert_eq!(carousel.message(), None);
        assert_eq!(carousel.items().next().map(|i| i.title.as_str()), Some("New"));
    }

    #[test]
    fn test_render_display_rank_falls_back_to_position() {
        let entries = vec![
            ChartEntry::new("A").with_rank(7),
            ChartEntry::new("B"),
            ChartEntry::new("C"),
        ];
        let mut carousel = Carousel::new();
        render(&mut carousel, &entries);
        let ranks: Vec<u32> = carousel.items().map(|i| i.rank).collect();
        assert_eq!(ranks, vec![7, 2, 3]);
    }

    #[test]
    fn test_render_uses_image_or_placeholder() {
        let entries = vec![
            ChartEntry::new("With Art").with_rank(1).with_image("https://img.example.com/a.jpg"),
            ChartEntry::new("Squid Game").with_rank(3),
        ];
        let mut carousel = Carousel::new();
        render(&mut carousel, &entries);
        let items: Vec<_> = carousel.items().collect();
        assert_eq!(items[0].src, "https://img.example.com/a.jpg");
        assert_eq!(
            items[1].src,
            "https://via.placeholder.com/260x170?text=3.+Squid+Game"
        );
    }

    #[test]
    fn test_placeholder_encodes_special_characters() {
        let uri = placeholder_uri(DEFAULT_PLACEHOLDER_BASE, 1, "Tom & Jerry?");
        assert_eq!(
            uri,
            "https://via.placeholder.com/260x170?text=1.+Tom+%26+Jerry%3F"
        );
        assert!(!uri.contains(' '));
    }

    #[test]
    fn test_placeholder_blank_title() {
        let uri = placeholder_uri(DEFAULT_PLACEHOLDER_BASE, 4, "  ");
        assert!(uri.ends_with("text=4.+Top"));
    }

    #[test]
    fn test_render_accessible_labels() {
        let mut carousel = Carousel::new();
        render(&mut carousel, &[ChartEntry::new("Dark").with_rank(2)]);
        let item = carousel.items().next().unwrap();
        assert_eq!(item.alt, "Dark (Rank 2)");

        let html = carousel.to_html();
        assert!(html.contains(r#"role="listitem""#));
        assert!(html.contains(r#"loading="lazy""#));
        assert!(html.contains(r#"alt="Dark (Rank 2)""#));
    }

    #[test]
    fn test_render_caps_at_ten() {
        let entries: Vec<_> = (1..=14).map(|i| ChartEntry::new(format!("T{i}"))).collect();
        let mut carousel = Carousel::new();
        render(&mut carousel, &entries);
        assert_eq!(carousel.items().count(), 10);
    }

    #[test]
    fn test_to_html_escapes() {
        let mut carousel = Carousel::new();
        render(
            &mut carousel,
            &[ChartEntry::new(r#"<b>"Quoted"</b>"#).with_rank(1).with_image("https://x/?a=1&b=2")],
        );
        let html = carousel.to_html();
        assert!(!html.contains("<b>"));
        assert!(html.contains("&quot;Quoted&quot;"));
        assert!(html.contains("a=1&amp;b=2"));
    }

    #[test]
    fn test_message_html() {
        let mut carousel = Carousel::new();
        carousel.show_message(UNAVAILABLE_MESSAGE);
        assert_eq!(
            carousel.to_html(),
            r#"<p class="chart-message">Unable to load charts right now.</p>"#
        );
    }
}
