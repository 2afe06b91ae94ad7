//! Gallery lightbox selection.

use crate::catalog::{gallery_image, GalleryImage};

/// The picture currently shown enlarged, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lightbox {
    selected: Option<GalleryImage>,
}

impl Lightbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, image: GalleryImage) {
        self.selected = Some(image);
    }

    /// Clicking the overlay clears the selection.
    pub fn dismiss(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&GalleryImage> {
        self.selected.as_ref()
    }

    /// Show the image named by a key such as `"2-1"`.
    ///
    /// A missing, malformed or out-of-range key dismisses the overlay.
    pub fn apply_key(&mut self, key: Option<&str>) {
        match key
            .and_then(parse_image_key)
            .and_then(|(section, index)| gallery_image(section, index))
        {
            Some(image) => self.select(image),
            None => self.dismiss(),
        }
    }

    /// Build the lightbox for an image key.
    pub fn from_key(key: Option<&str>) -> Self {
        let mut lightbox = Self::new();
        lightbox.apply_key(key);
        lightbox
    }
}

/// Parse a `section-index` image key.
pub fn parse_image_key(key: &str) -> Option<(usize, usize)> {
    let (section, index) = key.split_once('-')?;
    Some((section.parse().ok()?, index.parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::GALLERY;

    #[test]
    fn selects_and_dismisses() {
        let mut lightbox = Lightbox::new();
        assert!(lightbox.selected().is_none());

        let image = GALLERY[2].images[0];
        lightbox.select(image);
        assert_eq!(lightbox.selected(), Some(&image));

        lightbox.dismiss();
        assert!(lightbox.selected().is_none());
    }

    #[test]
    fn selecting_replaces_previous() {
        let mut lightbox = Lightbox::new();
        lightbox.select(GALLERY[0].images[0]);
        lightbox.select(GALLERY[0].images[1]);
        assert_eq!(lightbox.selected().map(|i| i.title), Some("Tile Collections"));
    }

    #[test]
    fn builds_from_key() {
        let lightbox = Lightbox::from_key(Some("3-0"));
        assert_eq!(lightbox.selected().map(|i| i.title), Some("Door Hardware"));

        assert!(Lightbox::from_key(Some("3-7")).selected().is_none());
        assert!(Lightbox::from_key(Some("x-1")).selected().is_none());
        assert!(Lightbox::from_key(Some("31")).selected().is_none());
        assert!(Lightbox::from_key(None).selected().is_none());
    }

    #[test]
    fn unknown_key_dismisses_open_overlay() {
        let mut lightbox = Lightbox::from_key(Some("0-0"));
        assert!(lightbox.selected().is_some());

        lightbox.apply_key(Some("0-99"));
        assert!(lightbox.selected().is_none());
    }
}
