// =============================================================================
// MEDIA MAPPING (Images & Videos)
// =============================================================================

use super::mapper::KinopoiskMapper;
use super::models::{Film, ImageEntry, PersonResponse, VideoResponse};
use crate::modules::media::domain::{
    entities::{CanonicalImage, MediaUrl},
    value_objects::ImageType,
};

impl KinopoiskMapper {
    // =========================================================================
    // IMAGE MAPPING
    // =========================================================================

    /// All images of a film in display priority: main poster, gallery posters, backdrops
    pub fn to_images(&self, film: &Film) -> Vec<CanonicalImage> {
        let main_poster = film
            .data
            .as_ref()
            .and_then(|d| d.poster_url.as_ref())
            .map(|url| CanonicalImage {
                image_type: ImageType::Primary,
                url: url.clone(),
                language: Some(self.config.metadata_language.clone()),
                width: None,
                height: None,
                provider_name: self.config.provider_name.clone(),
            });

        let gallery = film.images.as_ref();
        let posters = gallery.and_then(|g| g.posters.as_deref()).unwrap_or_default();
        let backdrops = gallery.and_then(|g| g.backdrops.as_deref()).unwrap_or_default();

        main_poster
            .into_iter()
            .chain(self.map_gallery(posters, ImageType::Primary))
            .chain(self.map_gallery(backdrops, ImageType::Backdrop))
            .collect()
    }

    /// Map gallery entries of one type, dropping entries without a URL
    pub fn map_gallery<'a>(
        &'a self,
        entries: &'a [ImageEntry],
        image_type: ImageType,
    ) -> impl Iterator<Item = CanonicalImage> + 'a {
        entries
            .iter()
            .filter_map(move |entry| self.map_image(entry, image_type))
    }

    /// Map a single gallery entry
    pub fn map_image(&self, entry: &ImageEntry, image_type: ImageType) -> Option<CanonicalImage> {
        let url = entry.url.clone()?;

        Some(CanonicalImage {
            image_type,
            url,
            language: entry.language.clone(),
            width: entry.width,
            height: entry.height,
            provider_name: self.config.provider_name.clone(),
        })
    }

    /// Portrait of a person, if the payload has one
    pub fn to_person_image(&self, person: Option<&PersonResponse>) -> Option<CanonicalImage> {
        let url = person?.poster_url.as_deref().filter(|url| !url.is_empty())?;

        Some(CanonicalImage {
            image_type: ImageType::Primary,
            url: url.to_string(),
            language: None,
            width: None,
            height: None,
            provider_name: self.config.provider_name.clone(),
        })
    }

    // =========================================================================
    // VIDEO MAPPING
    // =========================================================================

    /// Trailer links; absent when the response carries no trailers at all
    pub fn to_media_urls(&self, videos: Option<&VideoResponse>) -> Option<Vec<MediaUrl>> {
        let trailers = videos?.trailers.as_ref()?;
        if trailers.is_empty() {
            return None;
        }

        Some(
            trailers
                .iter()
                .flatten()
                .map(|trailer| MediaUrl {
                    name: trailer.name.clone(),
                    url: trailer.url.clone(),
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::super::models::{CommonFilmData, Images, Trailer};
    use super::*;

    fn entry(url: Option<&str>, language: Option<&str>) -> ImageEntry {
        ImageEntry {
            url: url.map(str::to_string),
            language: language.map(str::to_string),
            width: Some(1000),
            height: Some(1500),
        }
    }

    fn film(poster: Option<&str>, images: Option<Images>) -> Film {
        Film {
            data: Some(CommonFilmData {
                poster_url: poster.map(str::to_string),
                ..Default::default()
            }),
            images,
            ..Default::default()
        }
    }

    #[test]
    fn test_images_keep_display_priority() {
        let images = Images {
            posters: Some(vec![entry(Some("https://kp/p1.jpg"), Some("en"))]),
            backdrops: Some(vec![entry(Some("https://kp/b1.jpg"), None)]),
        };
        let result = KinopoiskMapper::default().to_images(&film(Some("https://kp/main.jpg"), Some(images)));

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].url, "https://kp/main.jpg");
        assert_eq!(result[0].image_type, ImageType::Primary);
        assert_eq!(result[0].language.as_deref(), Some("ru"));
        assert_eq!((result[0].width, result[0].height), (None, None));

        assert_eq!(result[1].url, "https://kp/p1.jpg");
        assert_eq!(result[1].image_type, ImageType::Primary);
        assert_eq!(result[1].language.as_deref(), Some("en"));
        assert_eq!(result[1].width, Some(1000));

        assert_eq!(result[2].url, "https://kp/b1.jpg");
        assert_eq!(result[2].image_type, ImageType::Backdrop);
        assert!(result.iter().all(|i| i.provider_name == "Кинопоиск"));
    }

    #[test]
    fn test_entries_without_url_are_dropped() {
        let images = Images {
            posters: Some(vec![entry(None, None), entry(Some("https://kp/p2.jpg"), None)]),
            backdrops: None,
        };
        let result = KinopoiskMapper::default().to_images(&film(None, Some(images)));
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].url, "https://kp/p2.jpg");
    }

    #[test]
    fn test_no_images() {
        let mapper = KinopoiskMapper::default();
        assert!(mapper.to_images(&Film::default()).is_empty());
        assert!(mapper.to_images(&film(None, Some(Images::default()))).is_empty());
    }

    #[test]
    fn test_person_image() {
        let mapper = KinopoiskMapper::default();
        let person = PersonResponse {
            poster_url: Some("https://kp/actor.jpg".to_string()),
            ..Default::default()
        };
        let image = mapper.to_person_image(Some(&person)).unwrap();
        assert_eq!(image.image_type, ImageType::Primary);
        assert_eq!(image.language, None);

        let empty = PersonResponse {
            poster_url: Some(String::new()),
            ..Default::default()
        };
        assert!(mapper.to_person_image(Some(&empty)).is_none());
        assert!(mapper.to_person_image(None).is_none());
    }

    #[test]
    fn test_media_urls() {
        let mapper = KinopoiskMapper::default();
        assert!(mapper.to_media_urls(None).is_none());
        assert!(mapper
            .to_media_urls(Some(&VideoResponse {
                trailers: Some(vec![]),
                teasers: None,
            }))
            .is_none());

        let videos = VideoResponse {
            trailers: Some(vec![Some(Trailer {
                url: Some("https://www.youtube.com/watch?v=vKQi3bBA1y8".to_string()),
                name: Some("Трейлер".to_string()),
                site: Some("YOUTUBE".to_string()),
            })]),
            teasers: None,
        };
        let urls = mapper.to_media_urls(Some(&videos)).unwrap();
        assert_eq!(urls.len(), 1);
        assert_eq!(urls[0].name.as_deref(), Some("Трейлер"));
    }

    #[test]
    fn test_null_only_trailers_give_empty_list() {
        let videos = VideoResponse {
            trailers: Some(vec![None]),
            teasers: None,
        };
        assert_eq!(
            KinopoiskMapper::default().to_media_urls(Some(&videos)),
            Some(vec![])
        );
    }
}
