use marquee_model::{CastMember, Credits, ImageUrl, ProfileSize};
use serde::Serialize;

use super::ScreenState;
use crate::cache::{CacheEntry, ResourceDriver, Subscription};
use crate::metadata::Resource;

pub const CAST_SKELETON_CARDS: usize = 6;
pub const CAST_PROFILE_SIZE: ProfileSize = ProfileSize::W185;
pub const MISSING_PROFILE_LABEL: &str = "Missing cast member picture";

/// One card in the cast row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CastCardView {
    pub id: u64,
    pub name: String,
    pub character: Option<String>,
    pub profile_url: Option<ImageUrl>,
}

impl CastCardView {
    pub fn from_member(member: &CastMember) -> Self {
        Self {
            id: member.id,
            name: member.name.clone(),
            character: member.character.clone(),
            profile_url: member.profile_url(CAST_PROFILE_SIZE),
        }
    }

    /// Label for the placeholder drawn instead of a missing picture.
    pub fn placeholder_label(&self) -> Option<&'static str> {
        self.profile_url.is_none().then_some(MISSING_PROFILE_LABEL)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CastRow {
    /// No cast listed; the row is not rendered at all.
    Hidden,
    Cards(Vec<CastCardView>),
}

impl CastRow {
    pub fn from_credits(credits: &Credits) -> Self {
        if credits.is_empty() {
            return CastRow::Hidden;
        }
        CastRow::Cards(credits.cast.iter().map(CastCardView::from_member).collect())
    }

    pub fn cards(&self) -> &[CastCardView] {
        match self {
            CastRow::Hidden => &[],
            CastRow::Cards(cards) => cards,
        }
    }
}

pub fn cast_view(enabled: bool, entry: &CacheEntry<Resource>) -> ScreenState<CastRow> {
    ScreenState::from_entry(enabled, entry, CAST_SKELETON_CARDS, |resource| {
        resource.as_credits().map(CastRow::from_credits)
    })
}

pub fn cast_screen<D>(subscription: &Subscription<D>) -> ScreenState<CastRow>
where
    D: ResourceDriver<Output = Resource>,
{
    cast_view(subscription.is_enabled(), &subscription.current())
}
