use crate::collection::{
    Collection, DecodeCollection, ErrorFromResponse, JsonDecoder, Link, PageError, PageFetcher,
    PageReference, RemoteErrorDecoder,
};

///
/// Pager
///
/// Follows `next`/`prev` references of any collection type.
///
/// `Ok(None)` is the single end-of-pagination signal: it covers both a
/// missing link and a link that yields a page with no items.
///

#[derive(Clone, Debug)]
pub struct Pager<F, D = JsonDecoder, R = RemoteErrorDecoder> {
    fetcher: F,
    decoder: D,
    errors: R,
}

impl<F> Pager<F> {
    /// Pager decoding JSON bodies and the platform's standard error payload.
    #[must_use]
    pub const fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            decoder: JsonDecoder,
            errors: RemoteErrorDecoder,
        }
    }
}

impl<F, D, R> Pager<F, D, R> {
    #[must_use]
    pub fn with_decoder<D2>(self, decoder: D2) -> Pager<F, D2, R> {
        Pager {
            fetcher: self.fetcher,
            decoder,
            errors: self.errors,
        }
    }

    #[must_use]
    pub fn with_errors<R2>(self, errors: R2) -> Pager<F, D, R2> {
        Pager {
            fetcher: self.fetcher,
            decoder: self.decoder,
            errors,
        }
    }

    #[must_use]
    pub const fn fetcher(&self) -> &F {
        &self.fetcher
    }
}

impl<F, D, R> Pager<F, D, R>
where
    F: PageFetcher,
    R: ErrorFromResponse,
{
    /// Fetch the page selected by `link`, or `Ok(None)` when there is none.
    pub fn advance<C>(&self, collection: &C, link: Link) -> Result<Option<C>, PageError>
    where
        C: Collection,
        D: DecodeCollection<C>,
    {
        let Some(reference) = collection.link(link) else {
            tracing::debug!(%link, "no page reference given, end of collection");
            return Ok(None);
        };

        self.fetch_page(reference)
    }

    pub fn next_page<C>(&self, collection: &C) -> Result<Option<C>, PageError>
    where
        C: Collection,
        D: DecodeCollection<C>,
    {
        self.advance(collection, Link::Next)
    }

    pub fn previous_page<C>(&self, collection: &C) -> Result<Option<C>, PageError>
    where
        C: Collection,
        D: DecodeCollection<C>,
    {
        self.advance(collection, Link::Prev)
    }

    /// Dereference one page reference exactly as given.
    ///
    /// An empty reference or an empty page is `Ok(None)`.
    pub fn fetch_page<C>(&self, reference: &str) -> Result<Option<C>, PageError>
    where
        C: Collection,
        D: DecodeCollection<C>,
    {
        if reference.is_empty() {
            return Ok(None);
        }

        let page_ref =
            PageReference::parse(reference).map_err(|source| PageError::InvalidReference {
                reference: reference.to_string(),
                source,
            })?;

        tracing::trace!(reference, "fetching page");
        let response = self
            .fetcher
            .fetch(&page_ref)
            .map_err(|source| PageError::Transport {
                reference: reference.to_string(),
                source: source.into(),
            })?;

        if !response.is_success() {
            tracing::debug!(reference, status = response.status, "page request failed");
            let err = self
                .errors
                .error_from_response(&response.body, response.status);

            return Err(PageError::Remote(err));
        }

        let page = self
            .decoder
            .decode(&response.body)
            .map_err(|source| PageError::Decode {
                reference: reference.to_string(),
                source,
            })?;

        if page.items().is_empty() {
            tracing::debug!(reference, "returned collection is empty, end of collection");
            return Ok(None);
        }

        Ok(Some(page))
    }

    /// Walk from `first` in the direction of `link`.
    ///
    /// Yields `first` as given, then each following page until the end of
    /// the collection. At most one error is yielded; the walk stops after it.
    pub const fn pages<C>(&self, first: C, link: Link) -> Pages<'_, F, D, R, C>
    where
        C: Collection,
        D: DecodeCollection<C>,
    {
        Pages {
            pager: self,
            link,
            pending: Some(first),
            reference: None,
        }
    }
}

///
/// Pages
///

pub struct Pages<'p, F, D, R, C> {
    pager: &'p Pager<F, D, R>,
    link: Link,
    pending: Option<C>,
    reference: Option<String>,
}

impl<F, D, R, C> Pages<'_, F, D, R, C>
where
    C: Collection,
{
    fn follow(&mut self, page: &C) {
        self.reference = page.link(self.link).map(str::to_string);
    }
}

impl<F, D, R, C> Iterator for Pages<'_, F, D, R, C>
where
    F: PageFetcher,
    D: DecodeCollection<C>,
    R: ErrorFromResponse,
    C: Collection,
{
    type Item = Result<C, PageError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(page) = self.pending.take() {
            self.follow(&page);
            return Some(Ok(page));
        }

        let reference = self.reference.take()?;
        match self.pager.fetch_page::<C>(&reference) {
            Ok(Some(page)) => {
                self.follow(&page);
                Some(Ok(page))
            }
            Ok(None) => None,
            Err(err) => Some(Err(err)),
        }
    }
}
