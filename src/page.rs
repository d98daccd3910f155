use crate::error::{SerenataError, SerenataResult};

/// Opaque external asset references. URLs are passed through to the host
/// untouched; the engine never fetches anything.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct AssetConfig {
    /// Background music, looped by the host.
    pub music_url: String,
    /// Imagery keyed by the chapter that shows it.
    pub chapter_images: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ChapterAlign {
    ImageLeft,
    ImageRight,
    Centered,
}

/// One narrative section of the scrolling page.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Chapter {
    /// Stable element id; reveal trackers are keyed by it.
    pub id: String,
    /// Small uppercase label ("Capítulo 1").
    pub label: String,
    pub title: String,
    pub body: String,
    /// Index into `AssetConfig::chapter_images`, if the chapter shows one.
    pub image: Option<usize>,
    pub align: ChapterAlign,
    /// Parallax speed for the chapter's decorative layer.
    pub parallax_speed: f64,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
}

/// The closing section with the accept button.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Finale {
    pub id: String,
    pub title: String,
    pub question: String,
    pub accept_label: String,
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Footer {
    pub message: String,
    pub signature: String,
}

/// The whole greeting page: fixed sections, fixed copy, fixed assets.
///
/// This is configuration, not content management — the set of sections is
/// hardcoded by the author and only the strings and asset URLs vary.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Page {
    pub assets: AssetConfig,
    pub hero: Hero,
    pub chapters: Vec<Chapter>,
    pub finale: Finale,
    pub footer: Footer,
    /// Seed for every decorative layout on the page.
    pub seed: u64,
}

impl Page {
    /// Parse a page document and validate it in one step.
    pub fn from_json(s: &str) -> SerenataResult<Self> {
        let page: Self = serde_json::from_str(s)?;
        page.validate()?;
        Ok(page)
    }

    pub fn validate(&self) -> SerenataResult<()> {
        if self.chapters.is_empty() {
            return Err(SerenataError::validation("page must have chapters"));
        }
        let mut ids: Vec<&str> = self
            .chapters
            .iter()
            .map(|c| c.id.as_str())
            .chain([self.finale.id.as_str()])
            .collect();
        ids.sort_unstable();
        if ids.windows(2).any(|w| w[0] == w[1]) {
            return Err(SerenataError::validation("section ids must be unique"));
        }
        for chapter in &self.chapters {
            if chapter.id.is_empty() || chapter.title.is_empty() {
                return Err(SerenataError::validation(
                    "chapters need a non-empty id and title",
                ));
            }
            if let Some(idx) = chapter.image {
                if idx >= self.assets.chapter_images.len() {
                    return Err(SerenataError::validation(format!(
                        "chapter '{}' references image {idx} but only {} are configured",
                        chapter.id,
                        self.assets.chapter_images.len()
                    )));
                }
            }
            if !chapter.parallax_speed.is_finite() {
                return Err(SerenataError::validation(format!(
                    "chapter '{}' has a non-finite parallax speed",
                    chapter.id
                )));
            }
        }
        Ok(())
    }

    /// The built-in story, as authored.
    pub fn default_story() -> Self {
        Self {
            assets: AssetConfig {
                music_url: "/musica.mp3".to_owned(),
                chapter_images: vec![
                    "/fotos/capitulo-1.jpg".to_owned(),
                    "/fotos/capitulo-2.jpg".to_owned(),
                ],
            },
            hero: Hero {
                title: "Nuestra historia".to_owned(),
                subtitle: "Un capítulo que quiero seguir escribiendo contigo".to_owned(),
            },
            chapters: vec![
                Chapter {
                    id: "capitulo-1".to_owned(),
                    label: "Capítulo 1".to_owned(),
                    title: "Cuando te conocí".to_owned(),
                    body: "Recuerdo el día exacto en que te vi por primera vez. El mundo \
                           parecía moverse a una velocidad normal, pero cuando cruzamos \
                           miradas, todo se detuvo."
                        .to_owned(),
                    image: Some(0),
                    align: ChapterAlign::ImageLeft,
                    parallax_speed: 0.6,
                },
                Chapter {
                    id: "capitulo-2".to_owned(),
                    label: "Capítulo 2".to_owned(),
                    title: "Lo que me haces sentir".to_owned(),
                    body: "Contigo, los lunes no pesan y los silencios no son incómodos. \
                           Tu risa es mi sonido favorito y tu calma es el refugio donde \
                           siempre quiero estar."
                        .to_owned(),
                    image: Some(1),
                    align: ChapterAlign::ImageRight,
                    parallax_speed: -0.4,
                },
                Chapter {
                    id: "capitulo-3".to_owned(),
                    label: "Capítulo 3".to_owned(),
                    title: "Hoy".to_owned(),
                    body: "No necesito días especiales para saber que te quiero, pero hoy \
                           es la excusa perfecta para recordártelo."
                        .to_owned(),
                    image: None,
                    align: ChapterAlign::Centered,
                    parallax_speed: 0.3,
                },
            ],
            finale: Finale {
                id: "propuesta".to_owned(),
                title: "Este 14 de febrero quiero seguir escribiendo nuestra historia..."
                    .to_owned(),
                question: "¿Quieres ser mi San Valentín?".to_owned(),
                accept_label: "Sí, acepto".to_owned(),
            },
            footer: Footer {
                message: "Gracias por ser mi lugar favorito.".to_owned(),
                signature: "Con amor, Renzo".to_owned(),
            },
            seed: 14,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_story_validates() {
        Page::default_story().validate().unwrap();
    }

    #[test]
    fn empty_chapters_rejected() {
        let mut page = Page::default_story();
        page.chapters.clear();
        assert!(page.validate().is_err());
    }

    #[test]
    fn duplicate_ids_rejected() {
        let mut page = Page::default_story();
        page.chapters[1].id = page.chapters[0].id.clone();
        assert!(page.validate().is_err());
    }

    #[test]
    fn dangling_image_index_rejected() {
        let mut page = Page::default_story();
        page.chapters[0].image = Some(9);
        let err = page.validate().unwrap_err();
        assert!(err.to_string().contains("capitulo-1"));
    }

    #[test]
    fn from_json_reports_parse_and_validation_failures() {
        let err = Page::from_json("{not json").unwrap_err();
        assert!(matches!(err, SerenataError::PageJson(_)));

        let mut page = Page::default_story();
        page.chapters.clear();
        let json = serde_json::to_string(&page).unwrap();
        let err = Page::from_json(&json).unwrap_err();
        assert!(matches!(err, SerenataError::Validation(_)));
    }

    #[test]
    fn round_trips_through_json() {
        let page = Page::default_story();
        let json = serde_json::to_string(&page).unwrap();
        let back: Page = serde_json::from_str(&json).unwrap();
        back.validate().unwrap();
        assert_eq!(back.chapters.len(), page.chapters.len());
        assert_eq!(back.footer.signature, page.footer.signature);
    }
}
