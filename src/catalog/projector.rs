use super::dto::{CatalogMovie, ImageList, MovieDetail, MovieSummary, VideoList};

pub(crate) const MAX_DETAIL_IMAGES: usize = 5;
const YOUTUBE_WATCH_URL: &str = "https://www.youtube.com/watch?v=";

pub(crate) fn summary(movie: CatalogMovie, image_base_url: &str) -> MovieSummary {
    MovieSummary {
        id: movie.id,
        title: movie.title,
        image_url: movie
            .backdrop_path
            .map(|path| format!("{image_base_url}{path}")),
    }
}

/// First YouTube trailer in upstream order, as a watch URL.
pub(crate) fn trailer_url(videos: &VideoList) -> Option<String> {
    videos
        .results
        .iter()
        .find(|v| v.kind == "Trailer" && v.site == "YouTube")
        .map(|v| format!("{YOUTUBE_WATCH_URL}{}", v.key))
}

pub(crate) fn detail(details: CatalogMovie, videos: &VideoList, images: ImageList) -> MovieDetail {
    MovieDetail {
        trailer_url: trailer_url(videos),
        id: details.id,
        title: details.title,
        rating: details.vote_average,
        description: details.overview,
        images: images
            .backdrops
            .into_iter()
            .take(MAX_DETAIL_IMAGES)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::dto::{ImageRecord, Video};

    const BASE: &str = "https://image.tmdb.org/t/p/w500";

    fn movie(id: i64, backdrop: Option<&str>) -> CatalogMovie {
        CatalogMovie {
            id,
            title: format!("Movie {id}"),
            backdrop_path: backdrop.map(str::to_string),
            vote_average: 7.5,
            overview: "overview".into(),
        }
    }

    fn video(key: &str, kind: &str, site: &str) -> Video {
        Video {
            key: key.into(),
            kind: kind.into(),
            site: site.into(),
        }
    }

    fn image(n: u32) -> ImageRecord {
        ImageRecord {
            file_path: format!("/img{n}.jpg"),
            width: 1280,
            height: 720,
            aspect_ratio: 1.778,
            vote_average: 0.0,
            vote_count: 0,
            iso_639_1: None,
        }
    }

    #[test]
    fn summary_joins_backdrop_onto_base() {
        let s = summary(movie(7, Some("/abc.jpg")), BASE);
        assert_eq!(s.id, 7);
        assert_eq!(s.title, "Movie 7");
        assert_eq!(s.image_url.as_deref(), Some("https://image.tmdb.org/t/p/w500/abc.jpg"));
    }

    #[test]
    fn summary_without_backdrop_has_null_image() {
        let s = summary(movie(7, None), BASE);
        assert!(s.image_url.is_none());
        let json = serde_json::to_value(&s).unwrap();
        assert!(json["imageUrl"].is_null());
    }

    #[test]
    fn trailer_requires_both_type_and_site() {
        let videos = VideoList {
            results: vec![
                video("teaser", "Teaser", "YouTube"),
                video("vimeo", "Trailer", "Vimeo"),
                video("first", "Trailer", "YouTube"),
                video("second", "Trailer", "YouTube"),
            ],
        };
        assert_eq!(
            trailer_url(&videos).as_deref(),
            Some("https://www.youtube.com/watch?v=first")
        );
    }

    #[test]
    fn no_matching_video_means_no_trailer() {
        let videos = VideoList {
            results: vec![video("clip", "Clip", "YouTube")],
        };
        assert!(trailer_url(&videos).is_none());
    }

    #[test]
    fn detail_keeps_first_five_images_in_order() {
        let images = ImageList {
            backdrops: (0..8).map(image).collect(),
        };
        let d = detail(movie(3, None), &VideoList { results: vec![] }, images);
        assert_eq!(d.images.len(), MAX_DETAIL_IMAGES);
        assert_eq!(d.images[0].file_path, "/img0.jpg");
        assert_eq!(d.images[4].file_path, "/img4.jpg");
        assert_eq!(d.rating, 7.5);
        assert_eq!(d.description, "overview");
        assert!(d.trailer_url.is_none());
    }

    #[test]
    fn detail_serializes_camel_case() {
        let d = detail(
            movie(3, None),
            &VideoList { results: vec![video("k", "Trailer", "YouTube")] },
            ImageList { backdrops: vec![image(1)] },
        );
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["trailerUrl"], "https://www.youtube.com/watch?v=k");
        assert_eq!(json["images"][0]["file_path"], "/img1.jpg");
    }
}
