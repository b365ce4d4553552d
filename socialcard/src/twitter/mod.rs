//! Builds the Twitter Card for a webpage.
//!
//! Twitter Cards are typed: the `twitter:card` tag declares what kind of
//! card the page wants, and that type decides which of the remaining tags
//! mean anything. An `app` card reads `twitter:app:*` tags, a `player` card
//! reads `twitter:player*` tags, and tags for the "wrong" type are silently
//! skipped rather than erroring.
//!
//! Parsing runs in two passes. The first filters the metatags down to the
//! `twitter:` namespace (into a fresh, owned list - the caller's slice is
//! never touched, since the Open Graph builder walks the same one) and
//! resolves the card type. The second builds the card from the filtered
//! tags.

use socialcard_types::{
    Meta,
    twitter::{App, Card, CardType, Player},
};

use crate::twitter::error::TwitterError;

pub mod error;

/// Re-exports of the Twitter Card types from `socialcard_types`.
///
/// These let you name the parsed card without depending on the types crate
/// directly.
pub mod types {
    pub use socialcard_types::twitter::{
        Account, App, AppInfo, Card, CardImage, CardType, Player,
    };
}

/// The namespace every Twitter Card metatag lives under.
const TWITTER_PREFIX: &str = "twitter:";

// sub-namespaces for the type-specific tags (after `twitter:` is stripped)
const APP_PREFIX: &str = "app:";
const PLAYER_PREFIX: &str = "player:";

/// Builds the [`Card`] for a webpage from its metatags.
///
/// Tags outside the `twitter:` namespace are skipped. If the page never
/// declares a `twitter:card` tag, the card's type is left as `None` - the
/// shared scalar tags (title, image, site, ...) still apply.
///
/// # Errors
///
/// This will return an error if a `twitter:card` tag carries an unknown
/// type, or if a player width/height isn't a base-10 integer.
pub fn parse(meta: &[Meta]) -> Result<Card, TwitterError> {
    let (card_type, filtered) = filter_twitter_meta(meta)?;

    let mut card = Card {
        card_type,
        ..Card::default()
    };

    // created lazily, on the first matching tag. a card that declares
    // `twitter:card=app` but no `app:*` tags ends up with *no* app record,
    // which is distinguishable from an empty one.
    let mut app: Option<App> = None;
    let mut player: Option<Player> = None;

    for m in &filtered {
        if m.name.starts_with(APP_PREFIX) {
            if card.card_type != Some(CardType::App) {
                log::trace!(
                    "Skipping `twitter:{}`: this isn't an `app` card.",
                    m.name
                );
                continue;
            }

            let app = app.get_or_insert_with(App::default);
            match m.name.as_str() {
                "app:id:iphone" => app.iphone.id = Some(m.value.clone()),
                "app:id:ipad" => app.ipad.id = Some(m.value.clone()),
                "app:id:googleplay" => app.google_play.id = Some(m.value.clone()),
                "app:name:iphone" => app.iphone.name = Some(m.value.clone()),
                "app:name:ipad" => app.ipad.name = Some(m.value.clone()),
                "app:name:googleplay" => app.google_play.name = Some(m.value.clone()),
                "app:url:iphone" => app.iphone.url = Some(m.value.clone()),
                "app:url:ipad" => app.ipad.url = Some(m.value.clone()),
                "app:url:googleplay" => app.google_play.url = Some(m.value.clone()),
                "app:country" => app.country = Some(m.value.clone()),
                other => log::trace!("Ignoring unknown app tag: `twitter:{other}`."),
            }
            continue;
        }

        if m.name.starts_with(PLAYER_PREFIX) || m.name == "player" {
            if card.card_type != Some(CardType::Player) {
                log::trace!(
                    "Skipping `twitter:{}`: this isn't a `player` card.",
                    m.name
                );
                continue;
            }

            let player = player.get_or_insert_with(Player::default);
            match m.name.as_str() {
                "player" => player.url = Some(m.value.clone()),
                "player:width" => player.width = Some(parse_dimension(m)?),
                "player:height" => player.height = Some(parse_dimension(m)?),
                "player:stream" => player.stream = Some(m.value.clone()),
                "player:stream:content_type" => {
                    player.stream_content_type = Some(m.value.clone())
                }
                other => log::trace!("Ignoring unknown player tag: `twitter:{other}`."),
            }
            continue;
        }

        // the shared scalars, valid on every card type
        match m.name.as_str() {
            "site" => card.site.user = Some(m.value.clone()),
            "site:id" => card.site.id = Some(m.value.clone()),
            "creator" => card.creator.user = Some(m.value.clone()),
            "creator:id" => card.creator.id = Some(m.value.clone()),
            "title" => card.title = Some(m.value.clone()),
            "description" => card.description = Some(m.value.clone()),
            "image" => card.image.url = Some(m.value.clone()),
            "image:alt" => card.image.alt = Some(m.value.clone()),
            other => log::trace!("Ignoring unknown Twitter Card tag: `twitter:{other}`."),
        }
    }

    card.app = app;
    card.player = player;

    Ok(card)
}

/// Filters the metatags down to the `twitter:` namespace, stripping the
/// prefix into a fresh owned list, and resolves the card type.
///
/// `card` tags are consumed here: each one is validated, the last one wins,
/// and none of them reach the build pass.
fn filter_twitter_meta(meta: &[Meta]) -> Result<(Option<CardType>, Vec<Meta>), TwitterError> {
    let mut card_type = None;
    let mut filtered = Vec::new();

    for m in meta {
        let Some(name) = m.name.strip_prefix(TWITTER_PREFIX) else {
            continue;
        };

        if name == "card" {
            card_type = Some(parse_card_type(&m.value)?);
        } else {
            filtered.push(Meta::new(name, m.value.clone()));
        }
    }

    Ok((card_type, filtered))
}

/// Maps a `twitter:card` tag's value to its [`CardType`].
fn parse_card_type(value: &str) -> Result<CardType, TwitterError> {
    match value {
        "summary" => Ok(CardType::Summary),
        "summary_large_image" => Ok(CardType::SummaryLargeImage),
        "app" => Ok(CardType::App),
        "player" => Ok(CardType::Player),
        other => {
            log::error!("Found a `twitter:card` tag with an unknown type: `{other}`!");
            Err(TwitterError::InvalidCardType(other.to_string()))
        }
    }
}

/// Parses a player width/height tag's value as a base-10 integer.
fn parse_dimension(m: &Meta) -> Result<u32, TwitterError> {
    m.value.parse::<u32>().map_err(|e| {
        log::error!(
            "Failed to parse `twitter:{}` as an integer! value: `{}`, err: {e}",
            m.name,
            m.value
        );
        TwitterError::InvalidDimension {
            field: format!("twitter:{}", m.name),
            value: m.value.clone(),
            source: e,
        }
    })
}
