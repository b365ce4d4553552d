//! Types for the Twitter Card object graph.
//!
//! A Twitter Card is shaped by its [`CardType`]: every card may carry the
//! shared scalars (title, description, site/creator identities, an image),
//! but only an `app` card gets an [`App`] record, and only a `player` card
//! gets a [`Player`] record.
//!
//! The `app`/`player` records are `Option`s on the card, and they stay
//! `None` unless the page actually declared at least one matching tag. A
//! card whose type is `app` but which never mentions any `app:*` tag has
//! **no** `App` record - that's deliberately distinguishable from an empty
//! one.

/// The kind of content a card will have.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CardType {
    /// A preview of the content before clicking through: works for most
    /// kinds of web content, from blog posts to products.
    Summary,

    /// Like [`CardType::Summary`], but featuring a large, full-width
    /// prominent image for a rich photo experience.
    SummaryLargeImage,

    /// Represents a mobile application, highlighting its name, icon, and
    /// per-platform install info.
    App,

    /// Delivers audio or video directly in the card.
    Player,
}

/// All the data used to build a Twitter Card.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Card {
    /// The card's declared type.
    ///
    /// `None` when the page never declared a `twitter:card` tag.
    pub card_type: Option<CardType>,

    /// A concise title for the content.
    pub title: Option<String>,

    /// A description that concisely summarizes the content.
    pub description: Option<String>,

    /// The Twitter account of the website the card is published on.
    pub site: Account,

    /// The Twitter account of the content's creator.
    pub creator: Account,

    /// The representative image of the card.
    pub image: CardImage,

    /// Per-platform application info. Only present on `app` cards that
    /// declared at least one `app:*` tag.
    pub app: Option<App>,

    /// Playback info. Only present on `player` cards that declared at least
    /// one `player` tag.
    pub player: Option<Player>,
}

/// A Twitter account identity: the site publishing the card, or the creator
/// of its content.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Account {
    /// The account's numeric ID, as the page printed it.
    pub id: Option<String>,

    /// The account's `@username`.
    pub user: Option<String>,
}

/// The representative image of the card.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardImage {
    pub url: Option<String>,

    /// A text description of the image for visually impaired users.
    pub alt: Option<String>,
}

/// All the info about an `app` card, across every platform the application
/// ships on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct App {
    pub iphone: AppInfo,
    pub ipad: AppInfo,
    pub google_play: AppInfo,

    /// The App Store country, if the app isn't available in the US store.
    pub country: Option<String>,
}

/// The information of an app on one specific platform.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppInfo {
    /// The app's name in that platform's store.
    pub name: Option<String>,

    /// The app's store ID - numeric for the App Store, a package name for
    /// Google Play.
    pub id: Option<String>,

    /// The app's custom URL scheme for deep linking.
    pub url: Option<String>,
}

/// All the data for a `player` card.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Player {
    /// The HTTPS URL of the player iframe.
    pub url: Option<String>,

    /// Width of the iframe, in pixels.
    pub width: Option<u32>,

    /// Height of the iframe, in pixels.
    pub height: Option<u32>,

    /// The URL of the raw video or audio stream.
    pub stream: Option<String>,

    /// The MIME type of the stream.
    pub stream_content_type: Option<String>,
}
