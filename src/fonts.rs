use std::collections::HashMap;

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, Weight};

#[derive(Hash, PartialEq, Eq, Clone)]
struct MeasureKey {
    text: String,
    font_size_bits: u32,
    bold: bool,
    mono: bool,
}

/// Width/height measurement of a single line of text, used to size
/// label background pills and legend entries.
pub trait TextMeasure {
    fn measure(&mut self, text: &str, font_size: f32, bold: bool, mono: bool) -> (f32, f32);
}

pub struct CosmicTextMeasure {
    font_system: FontSystem,
    cache: HashMap<MeasureKey, (f32, f32)>,
}

impl CosmicTextMeasure {
    pub fn new() -> Result<Self, String> {
        Ok(Self {
            font_system: FontSystem::new(),
            cache: HashMap::new(),
        })
    }
}

impl TextMeasure for CosmicTextMeasure {
    fn measure(&mut self, text: &str, font_size: f32, bold: bool, mono: bool) -> (f32, f32) {
        let key = MeasureKey {
            text: text.to_string(),
            font_size_bits: font_size.to_bits(),
            bold,
            mono,
        };

        if let Some(cached) = self.cache.get(&key) {
            return *cached;
        }

        let line_height = font_size * 1.2;
        let mut buffer = Buffer::new(
            &mut self.font_system,
            Metrics {
                font_size,
                line_height,
            },
        );

        buffer.set_size(&mut self.font_system, None, None);

        let attrs = Attrs::new()
            .family(if mono {
                Family::Monospace
            } else {
                Family::SansSerif
            })
            .weight(if bold { Weight::BOLD } else { Weight::NORMAL });

        buffer.set_text(&mut self.font_system, text, &attrs, Shaping::Advanced, None);

        let mut width: f32 = 0.0;
        let mut height: f32 = 0.0;
        for run in buffer.layout_runs() {
            width = width.max(run.line_w);
            height += run.line_height;
        }

        // Fall back to a character estimate when no font is installed,
        // so pills keep a sensible extent on bare systems.
        if width <= 0.0 {
            width = text.chars().count() as f32 * font_size * 0.55;
            height = line_height;
        }

        let measured = (width, height);
        self.cache.insert(key, measured);
        measured
    }
}
