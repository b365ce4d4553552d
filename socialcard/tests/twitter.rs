use socialcard::{
    Meta,
    twitter::{
        self,
        error::TwitterError,
        types::{App, AppInfo, Card, CardType, Player},
    },
};

fn logger() {
    _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::max())
        .format_file(true)
        .format_line_number(true)
        .try_init();
}

fn meta(pairs: &[(&str, &str)]) -> Vec<Meta> {
    pairs.iter().map(|(n, v)| Meta::new(*n, *v)).collect()
}

/// A page without any `twitter:` tags builds an empty card - no error.
#[test]
fn no_twitter_tags_builds_empty_card() {
    logger();

    let card = twitter::parse(&meta(&[
        ("og:title", "A Good Page"),
        ("viewport", "width=device-width"),
    ]))
    .expect("no `twitter:` tags is fine");

    assert_eq!(card, Card::default());
}

/// `twitter:card` alone decides the type; everything else stays zero.
#[test]
fn card_tag_sets_the_type() {
    logger();

    let card = twitter::parse(&meta(&[("twitter:card", "summary")]))
        .expect("`summary` is a valid card type");

    assert_eq!(
        card,
        Card {
            card_type: Some(CardType::Summary),
            ..Card::default()
        }
    );
}

/// No `twitter:card` tag at all means no type - not an error.
#[test]
fn missing_card_tag_leaves_type_unset() {
    logger();

    let card = twitter::parse(&meta(&[("twitter:title", "A Good Page")]))
        .expect("the type tag is optional");

    assert_eq!(card.card_type, None);
    assert_eq!(card.title.as_deref(), Some("A Good Page"));
}

#[test]
fn unknown_card_type_fails() {
    logger();

    let err = twitter::parse(&meta(&[
        ("twitter:card", "bogus"),
        ("twitter:title", "never read"),
    ]))
    .expect_err("`bogus` isn't a card type");

    assert_eq!(err, TwitterError::InvalidCardType("bogus".into()));
}

/// When a page declares `twitter:card` more than once, every value is
/// validated and the last one wins.
#[test]
fn last_card_tag_wins() {
    logger();

    let card = twitter::parse(&meta(&[
        ("twitter:card", "summary"),
        ("twitter:card", "summary_large_image"),
    ]))
    .expect("both values are valid");

    assert_eq!(card.card_type, Some(CardType::SummaryLargeImage));
}

/// The shared scalars apply no matter what the type is.
#[test]
fn shared_scalars_land_on_the_card() {
    logger();

    let card = twitter::parse(&meta(&[
        ("twitter:card", "summary_large_image"),
        ("twitter:site", "@nytimes"),
        ("twitter:site:id", "807095"),
        ("twitter:creator", "@SarahMaslinNir"),
        ("twitter:creator:id", "24134103"),
        ("twitter:title", "Parade of Fans"),
        ("twitter:description", "NEWARK - The guest list..."),
        ("twitter:image", "https://example.com/cover.jpg"),
        ("twitter:image:alt", "A crowd at the parade"),
    ]))
    .expect("all scalar tags are valid");

    assert_eq!(card.card_type, Some(CardType::SummaryLargeImage));
    assert_eq!(card.site.user.as_deref(), Some("@nytimes"));
    assert_eq!(card.site.id.as_deref(), Some("807095"));
    assert_eq!(card.creator.user.as_deref(), Some("@SarahMaslinNir"));
    assert_eq!(card.creator.id.as_deref(), Some("24134103"));
    assert_eq!(card.title.as_deref(), Some("Parade of Fans"));
    assert_eq!(card.description.as_deref(), Some("NEWARK - The guest list..."));
    assert_eq!(card.image.url.as_deref(), Some("https://example.com/cover.jpg"));
    assert_eq!(card.image.alt.as_deref(), Some("A crowd at the parade"));
}

/// Tags for the wrong card type are skipped, not errors - and skipped tags
/// never lazily create their record.
#[test]
fn wrong_type_tags_are_ignored() {
    logger();

    let card = twitter::parse(&meta(&[
        ("twitter:card", "summary"),
        ("twitter:player:width", "5"),
        ("twitter:app:country", "US"),
    ]))
    .expect("wrong-type tags never fail the build");

    assert_eq!(card.card_type, Some(CardType::Summary));
    assert_eq!(card.player, None);
    assert_eq!(card.app, None);
}

/// Even an invalid integer is fine when the tag belongs to the wrong type:
/// it's skipped before the value is ever parsed.
#[test]
fn wrong_type_tags_skip_integer_parsing() {
    logger();

    let card = twitter::parse(&meta(&[
        ("twitter:card", "summary"),
        ("twitter:player:width", "notanumber"),
    ]))
    .expect("the tag is skipped before parsing");

    assert_eq!(card.player, None);
}

#[test]
fn player_card_builds_its_player() {
    logger();

    let card = twitter::parse(&meta(&[
        ("twitter:card", "player"),
        ("twitter:player", "https://example.com/embed"),
        ("twitter:player:width", "435"),
        ("twitter:player:height", "251"),
        ("twitter:player:stream", "https://example.com/raw.mp4"),
        ("twitter:player:stream:content_type", "video/mp4"),
    ]))
    .expect("the player tags are valid");

    assert_eq!(
        card.player,
        Some(Player {
            url: Some("https://example.com/embed".into()),
            width: Some(435),
            height: Some(251),
            stream: Some("https://example.com/raw.mp4".into()),
            stream_content_type: Some("video/mp4".into()),
        })
    );
    assert_eq!(card.app, None);
}

/// A `player` card with no player tags has *no* player record - lazily
/// created records stay absent, which is distinguishable from empty.
#[test]
fn player_record_is_lazily_created() {
    logger();

    let card = twitter::parse(&meta(&[
        ("twitter:card", "player"),
        ("twitter:title", "A Video"),
    ]))
    .expect("a bare `player` card is fine");

    assert_eq!(card.card_type, Some(CardType::Player));
    assert_eq!(card.player, None, "no player tag ever matched");

    // ...while a single matching tag creates the record
    let card = twitter::parse(&meta(&[
        ("twitter:card", "player"),
        ("twitter:player", "https://example.com/embed"),
    ]))
    .expect("one player tag is fine");
    assert!(card.player.is_some());
}

#[test]
fn player_dimension_must_be_an_integer() {
    logger();

    let err = twitter::parse(&meta(&[
        ("twitter:card", "player"),
        ("twitter:player:height", "tall"),
    ]))
    .expect_err("`tall` is not an integer");

    assert!(matches!(
        err,
        TwitterError::InvalidDimension { ref field, ref value, .. }
            if field == "twitter:player:height" && value == "tall"
    ));
}

#[test]
fn app_card_builds_its_app() {
    logger();

    let card = twitter::parse(&meta(&[
        ("twitter:card", "app"),
        ("twitter:app:name:iphone", "Cannonball"),
        ("twitter:app:id:iphone", "929750075"),
        ("twitter:app:url:iphone", "cannonball://poem/5149e249222f9e600a7540ef"),
        ("twitter:app:name:ipad", "Cannonball"),
        ("twitter:app:id:ipad", "929750075"),
        ("twitter:app:url:ipad", "cannonball://poem/5149e249222f9e600a7540ef"),
        ("twitter:app:name:googleplay", "Cannonball"),
        ("twitter:app:id:googleplay", "io.fabric.samples.cannonball"),
        ("twitter:app:url:googleplay", "http://cannonball.fabric.io/poem/5149e249222f9e600a7540ef"),
        ("twitter:app:country", "US"),
    ]))
    .expect("the app tags are valid");

    assert_eq!(
        card.app,
        Some(App {
            iphone: AppInfo {
                name: Some("Cannonball".into()),
                id: Some("929750075".into()),
                url: Some("cannonball://poem/5149e249222f9e600a7540ef".into()),
            },
            ipad: AppInfo {
                name: Some("Cannonball".into()),
                id: Some("929750075".into()),
                url: Some("cannonball://poem/5149e249222f9e600a7540ef".into()),
            },
            google_play: AppInfo {
                name: Some("Cannonball".into()),
                id: Some("io.fabric.samples.cannonball".into()),
                url: Some("http://cannonball.fabric.io/poem/5149e249222f9e600a7540ef".into()),
            },
            country: Some("US".into()),
        })
    );
    assert_eq!(card.player, None);
}

/// Same lazy-creation rule for `app` cards.
#[test]
fn app_record_is_lazily_created() {
    logger();

    let card = twitter::parse(&meta(&[("twitter:card", "app")]))
        .expect("a bare `app` card is fine");
    assert_eq!(card.app, None, "no app tag ever matched");

    let card = twitter::parse(&meta(&[
        ("twitter:card", "app"),
        ("twitter:app:country", "US"),
    ]))
    .expect("one app tag is fine");
    assert_eq!(
        card.app,
        Some(App {
            country: Some("US".into()),
            ..App::default()
        })
    );
}

/// Running the builder twice over the same tags yields structurally equal
/// cards - there's no hidden state, and the input is never rewritten.
#[test]
fn parsing_is_idempotent() {
    logger();

    let tags = meta(&[
        ("twitter:card", "player"),
        ("twitter:player", "https://example.com/embed"),
        ("twitter:site", "@example"),
    ]);

    let first = twitter::parse(&tags).expect("tags are valid");
    let second = twitter::parse(&tags).expect("tags are still valid");
    assert_eq!(first, second);

    // the caller's list still carries its prefixes
    assert_eq!(tags[0].name, "twitter:card");
}
