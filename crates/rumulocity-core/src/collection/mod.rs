//! Module: collection
//! Responsibility: paginated collection traversal over server-issued links.
//! Does not own: transport, authentication, or resource-specific decoding.
//! Boundary: resource APIs supply a fetcher and a decoder; this module decides
//! when pagination has ended.

mod error;
mod fetch;
mod pager;


pub use error::PageError;
pub use fetch::{
    DecodeCollection, DecodeError, ErrorFromResponse, JsonDecoder, PageFetcher, PageReference,
    RawResponse, RemoteErrorDecoder, TransportError,
};
pub use pager::{Pager, Pages};

use rumulocity_derive::JsonObject;
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// Collection
///
/// A decoded page: link references plus the page's items.
/// An empty or missing link means there is no such page.
///

pub trait Collection {
    type Item;

    fn self_ref(&self) -> Option<&str>;

    fn next_ref(&self) -> Option<&str>;

    fn prev_ref(&self) -> Option<&str>;

    fn items(&self) -> &[Self::Item];

    fn statistics(&self) -> Option<&PagingStatistics> {
        None
    }

    /// The reference selected by `link`, with empty strings treated as absent.
    fn link(&self, link: Link) -> Option<&str> {
        let reference = match link {
            Link::Next => self.next_ref(),
            Link::Prev => self.prev_ref(),
        };

        reference.filter(|r| !r.is_empty())
    }
}

///
/// Link
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Link {
    Next,
    Prev,
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Next => "next",
            Self::Prev => "prev",
        };

        f.write_str(label)
    }
}

///
/// PageRef
///
/// Field types usable as a page reference. Empty strings are absent.
///

pub trait PageRef {
    fn page_ref(&self) -> Option<&str>;
}

impl PageRef for str {
    fn page_ref(&self) -> Option<&str> {
        (!self.is_empty()).then_some(self)
    }
}

impl PageRef for String {
    fn page_ref(&self) -> Option<&str> {
        self.as_str().page_ref()
    }
}

impl<T: PageRef> PageRef for Option<T> {
    fn page_ref(&self) -> Option<&str> {
        self.as_ref().and_then(PageRef::page_ref)
    }
}

impl<T: PageRef + ?Sized> PageRef for &T {
    fn page_ref(&self) -> Option<&str> {
        (**self).page_ref()
    }
}

///
/// StatisticsRef
///
/// Field types usable as a collection's statistics.
///

pub trait StatisticsRef {
    fn statistics_ref(&self) -> Option<&PagingStatistics>;
}

impl StatisticsRef for PagingStatistics {
    fn statistics_ref(&self) -> Option<&PagingStatistics> {
        Some(self)
    }
}

impl StatisticsRef for Option<PagingStatistics> {
    fn statistics_ref(&self) -> Option<&PagingStatistics> {
        self.as_ref()
    }
}

///
/// PagingStatistics
///
/// Paging details the platform attaches to a collection when asked.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, JsonObject, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
#[jsonc(rename_all = "camelCase")]
pub struct PagingStatistics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[jsonc(omit_empty)]
    pub total_pages: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[jsonc(omit_empty)]
    pub page_size: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[jsonc(omit_empty)]
    pub current_page: Option<u64>,
}
