//! Draws an activity onto the template image.

use crate::{activity::Activity, error::AssetError};
use image::{DynamicImage, ImageOutputFormat, Rgba, RgbaImage};
use imageproc::drawing::{draw_text_mut, text_size};
use rusttype::{Font, Scale};
use std::{io::Cursor, path::PathBuf};

pub const DEFAULT_TEMPLATE_PATH: &str = "./assets/bored-base.png";
pub const DEFAULT_FONT_PATH: &str = "./assets/Horta_demo.ttf";

const TEXT_COLOR: Rgba<u8> = Rgba([0xff, 0xff, 0xff, 0xff]);
const FONT_SCALE: f32 = 42.0;

/// Descriptions longer than this are wrapped onto a second line.
const WORDS_PER_LINE: usize = 5;

// Text anchors on the template, in pixels.  Each string is centered on its anchor.
const ANCHOR_SINGLE_LINE: (i32, i32) = (320, 236);
const ANCHOR_FIRST_LINE: (i32, i32) = (320, 214);
const ANCHOR_SECOND_LINE: (i32, i32) = (320, 262);
const ANCHOR_PRICE: (i32, i32) = (86, 440);
const ANCHOR_CATEGORY: (i32, i32) = (320, 440);
const ANCHOR_PARTICIPANTS: (i32, i32) = (538, 440);

/// A string and the point it is centered on.
#[derive(Debug, PartialEq)]
pub struct Placement {
    pub text: String,
    pub anchor: (i32, i32),
}

/// Renders activity images.  Assets are loaded from disk on every render.
#[derive(Clone, Debug)]
pub struct Composer {
    template_path: PathBuf,
    font_path: PathBuf,
}

impl Composer {
    pub fn new(template_path: impl Into<PathBuf>, font_path: impl Into<PathBuf>) -> Self {
        Self {
            template_path: template_path.into(),
            font_path: font_path.into(),
        }
    }

    /// Where each piece of text goes for `activity`.
    pub fn layout(activity: &Activity) -> Vec<Placement> {
        let place = |text: String, anchor| Placement { text, anchor };

        let words: Vec<&str> = activity.description.split_whitespace().collect();
        let mut placements = if words.len() > WORDS_PER_LINE {
            vec![
                place(words[..WORDS_PER_LINE].join(" "), ANCHOR_FIRST_LINE),
                place(words[WORDS_PER_LINE..].join(" "), ANCHOR_SECOND_LINE),
            ]
        } else {
            vec![place(words.join(" "), ANCHOR_SINGLE_LINE)]
        };

        placements.push(place(activity.price_label(), ANCHOR_PRICE));
        placements.push(place(activity.category.clone(), ANCHOR_CATEGORY));
        placements.push(place(
            activity.participant_count.to_string(),
            ANCHOR_PARTICIPANTS,
        ));
        placements
    }

    /// Render `activity` onto the template and encode the result as PNG.
    pub fn render(&self, activity: &Activity) -> Result<Vec<u8>, AssetError> {
        let mut canvas = self.load_template()?;
        let font = self.load_font()?;
        let scale = Scale::uniform(FONT_SCALE);

        for Placement { text, anchor } in Self::layout(activity) {
            let (width, height) = text_size(scale, &font, &text);
            let x = anchor.0 - width / 2;
            let y = anchor.1 - height / 2;
            draw_text_mut(&mut canvas, TEXT_COLOR, x, y, scale, &font, &text);
        }

        let mut png = Vec::new();
        DynamicImage::ImageRgba8(canvas)
            .write_to(&mut Cursor::new(&mut png), ImageOutputFormat::Png)
            .map_err(AssetError::Encode)?;
        Ok(png)
    }

    fn load_template(&self) -> Result<RgbaImage, AssetError> {
        image::open(&self.template_path)
            .map(|image| image.to_rgba8())
            .map_err(|source| AssetError::Template {
                path: self.template_path.clone(),
                source,
            })
    }

    fn load_font(&self) -> Result<Font<'static>, AssetError> {
        let data = std::fs::read(&self.font_path).map_err(|source| AssetError::Font {
            path: self.font_path.clone(),
            source,
        })?;
        Font::try_from_vec(data).ok_or_else(|| AssetError::InvalidFont {
            path: self.font_path.clone(),
        })
    }
}
