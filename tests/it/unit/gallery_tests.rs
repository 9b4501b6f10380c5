use showreel::gallery::card::selected_project;
use showreel::gallery::{
    stack_styles, CardRect, CardStyle, Gallery, ProjectCard, ProjectFeed, RevealTracker,
};
use showreel::host::MemoryStore;

const FEED: &str = r#"{
    "projects": [
        { "id": 1, "slug": "atlas", "title": "Atlas", "image": "img/atlas.jpg", "tags": ["Branding", "Web"] },
        { "id": 2, "slug": "nocturne", "title": "Nocturne", "image": "img/nocturne.jpg" }
    ]
}"#;

fn feed() -> ProjectFeed {
    ProjectFeed::from_json(FEED).expect("valid feed")
}

#[test]
fn test_card_view_model() {
    let feed = feed();
    let card = ProjectCard::new(&feed.projects[0], 0);

    insta::assert_json_snapshot!(card, @r###"
    {
      "id": 1,
      "slug": "atlas",
      "title": "Atlas",
      "image": "img/atlas.jpg",
      "image_alt": "Atlas",
      "tags": [
        "Branding",
        "Web"
      ],
      "animation_delay": "0.1s"
    }
    "###);
}

#[test]
fn test_error_view() {
    let gallery = Gallery::from_feed(ProjectFeed::from_json("{ not json"));

    assert!(gallery.is_error());
    assert!(gallery.cards().is_empty());
    insta::assert_json_snapshot!(gallery, @r###"
    {
      "kind": "error",
      "message": "Unable to load projects. Please try again later."
    }
    "###);
}

#[test]
fn test_cards_are_staggered_in_feed_order() {
    let gallery = Gallery::from_feed(Ok(feed()));
    let delays: Vec<&str> = gallery
        .cards()
        .iter()
        .map(|card| card.animation_delay.as_str())
        .collect();

    assert_eq!(delays, ["0.1s", "0.2s"]);
    assert!(gallery.cards()[1].tags.is_empty());
}

#[test]
fn test_selected_project_round_trips_through_session() {
    let feed = feed();
    let card = ProjectCard::new(&feed.projects[1], 1);
    let mut session = MemoryStore::new();

    assert!(selected_project(&session).is_none());
    card.select(&mut session).expect("project serializes");

    let selected = selected_project(&session).expect("project stored");
    assert_eq!(selected.slug, "nocturne");
    assert_eq!(feed.find_by_slug("nocturne"), Some(&selected));
}

#[test]
fn test_reveal_is_sticky() {
    let mut tracker = RevealTracker::default();

    // Viewport 800 with a 50px bottom margin: root box is [0, 750)
    assert_eq!(tracker.update([(0, 100.0, 200.0), (1, 760.0, 200.0)], 800.0), vec![0]);
    assert_eq!(tracker.update([(0, -900.0, 200.0), (1, 700.0, 200.0)], 800.0), vec![1]);
    assert!(tracker.is_revealed(0));
    assert_eq!(tracker.revealed_count(), 2);
}

#[test]
fn test_last_stacked_card_is_untouched() {
    let cards = [CardRect::new(80.0, 400.0), CardRect::new(600.0, 400.0)];
    let styles = stack_styles(&cards);

    assert_eq!(styles.len(), 2);
    assert_eq!(styles[1], CardStyle::IDENTITY);
}
