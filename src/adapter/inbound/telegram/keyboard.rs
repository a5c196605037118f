//! Inline keyboard for league selection.

use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::domain::League;

const CALLBACK_PREFIX: &str = "league:";

/// Callback data carried by a league button.
#[must_use]
pub fn callback_data(league: League) -> String {
    format!("{CALLBACK_PREFIX}{}", league.slug())
}

/// One button per league, one league per row.
#[must_use]
pub fn league_keyboard() -> InlineKeyboardMarkup {
    let rows: Vec<Vec<InlineKeyboardButton>> = League::ALL
        .iter()
        .map(|&league| {
            vec![InlineKeyboardButton::callback(
                league.name(),
                callback_data(league),
            )]
        })
        .collect();
    InlineKeyboardMarkup::new(rows)
}

/// League selected by a button press, if the data came from [`league_keyboard`].
#[must_use]
pub fn parse_callback(data: &str) -> Option<League> {
    let slug = data.strip_prefix(CALLBACK_PREFIX)?;
    League::parse(slug).ok()
}
