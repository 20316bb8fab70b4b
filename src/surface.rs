/*
 * Surface Module
 *
 * This module defines the 2D drawing surface the graph paints onto.
 * Coordinates are surface-local: origin at the top-left corner, y growing downward.
 *
 * The simulation never talks to nannou directly. Each tick writes into a
 * `DrawSurface`; the host records the frame in a `CommandBuffer` and the
 * renderer replays it onto the window.
 */

use std::fmt;

use nannou::prelude::Vec2;
use serde::Deserialize;
use thiserror::Error;

use crate::store::SurfaceSize;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("colour `{0}` must start with '#'")]
    MissingHash(String),
    #[error("colour `{0}` must have 6 hex digits")]
    BadLength(String),
    #[error("colour `{0}` contains a non-hex digit")]
    BadDigit(String),
}

// An sRGB colour with straight alpha in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    // Parse a `#rrggbb` hex string
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(hex.to_string()))?;
        if digits.len() != 6 {
            return Err(ColorParseError::BadLength(hex.to_string()));
        }

        let channel = |i: usize| {
            digits
                .get(i..i + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| ColorParseError::BadDigit(hex.to_string()))
        };

        Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a: a.clamp(0.0, 1.0), ..self }
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(value.trim())
    }
}

// CSS-style rendering, handy in logs and test failures
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a >= 1.0 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub size: u32,
    pub family: String,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            size: 14,
            family: "Inter".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

/// The drawing context the render loop needs.
///
/// Fill and stroke styles are sticky: they apply to every following
/// `fill_text` / `stroke_line` call until changed, like a canvas 2D context.
pub trait DrawSurface {
    fn size(&self) -> SurfaceSize;
    fn clear(&mut self);
    fn set_fill(&mut self, color: Color);
    fn set_stroke(&mut self, color: Color);
    fn set_font(&mut self, font: &Font);
    fn fill_text(&mut self, text: &str, at: Vec2, align: TextAlign);
    fn stroke_line(&mut self, from: Vec2, to: Vec2);
}

// A resolved drawing operation, styles already applied
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Text {
        text: String,
        at: Vec2,
        align: TextAlign,
        color: Color,
        font: Font,
    },
    Line {
        from: Vec2,
        to: Vec2,
        color: Color,
    },
}

/// Records one frame of drawing.
///
/// `clear` throws away everything recorded so far, so the buffer always
/// holds exactly what is visible after the last clear.
#[derive(Debug, Clone)]
pub struct CommandBuffer {
    size: SurfaceSize,
    fill: Color,
    stroke: Color,
    font: Font,
    commands: Vec<DrawCommand>,
    clears: u64,
}

impl CommandBuffer {
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            fill: Color::rgb(0, 0, 0),
            stroke: Color::rgb(0, 0, 0),
            font: Font::default(),
            commands: Vec::new(),
            clears: 0,
        }
    }

    // Match the recorded surface to the host's measured size
    pub fn set_size(&mut self, size: SurfaceSize) {
        self.size = size;
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear_count(&self) -> u64 {
        self.clears
    }

    pub fn lines(&self) -> impl Iterator<Item = (Vec2, Vec2, Color)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Line { from, to, color } => Some((*from, *to, *color)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, Vec2)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { text, at, .. } => Some((text.as_str(), *at)),
            _ => None,
        })
    }
}

impl DrawSurface for CommandBuffer {
    fn size(&self) -> SurfaceSize {
        self.size
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.clears += 1;
    }

    fn set_fill(&mut self, color: Color) {
        self.fill = color;
    }

    fn set_stroke(&mut self, color: Color) {
        self.stroke = color;
    }

    fn set_font(&mut self, font: &Font) {
        self.font = font.clone();
    }

    fn fill_text(&mut self, text: &str, at: Vec2, align: TextAlign) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            at,
            align,
            color: self.fill,
            font: self.font.clone(),
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color: self.stroke,
        });
    }
}
