//! Share-link QR codes rasterized to a fixed-size grayscale image

use anyhow::{anyhow, Context, Result};
use qrcodegen::{QrCode, QrCodeEcc};
use std::path::Path;

use crate::constants::export::{QR_MARGIN, QR_SIZE};

const DARK: u8 = 0x00;
const LIGHT: u8 = 0xFF;

/// Square 8-bit grayscale QR image
#[derive(Debug, Clone)]
pub struct QrImage {
    size: u32,
    pixels: Vec<u8>,
}

impl QrImage {
    /// Default geometry: 260×260 pixels, one-module quiet zone
    pub fn encode(text: &str) -> Result<Self> {
        Self::encode_with(text, QR_SIZE, QR_MARGIN)
    }

    pub fn encode_with(text: &str, size: u32, margin: u32) -> Result<Self> {
        let code = QrCode::encode_text(text, QrCodeEcc::Medium)
            .map_err(|e| anyhow!("Share link is too long for a QR code ({} bytes): {e:?}", text.len()))?;

        // qrcodegen sizes are 21..=177
        let modules = code.size() as u32 + 2 * margin;
        let scale = (size / modules).max(1);
        let edge = size.max(modules * scale);
        let offset = (edge - modules * scale) / 2;
        let quiet = margin as i32;

        let mut pixels = vec![LIGHT; (edge * edge) as usize];
        for y in 0..edge {
            for x in 0..edge {
                if x < offset || y < offset {
                    continue;
                }
                let mx = ((x - offset) / scale) as i32 - quiet;
                let my = ((y - offset) / scale) as i32 - quiet;
                // out-of-range coordinates read as light modules
                if code.get_module(mx, my) {
                    pixels[(y * edge + x) as usize] = DARK;
                }
            }
        }

        Ok(Self { size: edge, pixels })
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    #[cfg(test)]
    pub fn is_dark(&self, x: u32, y: u32) -> bool {
        self.pixels
            .get((y * self.size + x) as usize)
            .is_some_and(|&p| p == DARK)
    }

    /// RGBA bytes for GPU textures
    pub fn to_rgba(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|&luma| [luma, luma, luma, 0xFF])
            .collect()
    }

    pub fn to_png(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, self.size, self.size);
            encoder.set_color(png::ColorType::Grayscale);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header().context("Failed to write PNG header")?;
            writer
                .write_image_data(&self.pixels)
                .context("Failed to encode QR image data")?;
            writer.finish().context("Failed to finish PNG stream")?;
        }
        Ok(buf)
    }

    pub fn write_png(&self, path: &Path) -> Result<()> {
        let bytes = self.to_png()?;
        super::write_artifact(path, bytes).with_context(|| format!("Failed to write QR image to {:?}", path))
    }
}
