//! Identity contract between carousel items and the engine.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use crate::{
    content::{CoverArt, RepresentativeWork, ResearchHighlight},
    ids::ContentId,
};

/// An item that can be laid out on a carousel track.
///
/// The engine never inspects the payload. It only asks for a stable key,
/// which is used for render keys and to decide whether a new item list is
/// the same list as the one currently mounted.
pub trait CarouselItem {
    type Key: Clone + Eq + Hash + Debug + Display;

    fn key(&self) -> Self::Key;
}

impl CarouselItem for CoverArt {
    type Key = ContentId;

    fn key(&self) -> ContentId {
        self.id
    }
}

impl CarouselItem for RepresentativeWork {
    type Key = ContentId;

    fn key(&self) -> ContentId {
        self.id
    }
}

impl CarouselItem for ResearchHighlight {
    type Key = ContentId;

    fn key(&self) -> ContentId {
        self.id
    }
}

impl<T: CarouselItem + ?Sized> CarouselItem for &T {
    type Key = T::Key;

    fn key(&self) -> Self::Key {
        (**self).key()
    }
}
