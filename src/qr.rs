use base64::{engine::general_purpose::STANDARD, Engine as _};
use qrcode::{render::svg, EcLevel, QrCode};

use crate::{error::Result, site::WHATSAPP_URL};

const MIN_DIMENSION: u32 = 256;

/// Encodes `text` as a QR symbol with high error correction and returns it as an SVG data URI.
pub fn encode_data_url(text: &str) -> Result<String> {
    let code = QrCode::with_error_correction_level(text.as_bytes(), EcLevel::H)?;
    let image = code
        .render::<svg::Color>()
        .min_dimensions(MIN_DIMENSION, MIN_DIMENSION)
        .quiet_zone(true)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build();
    Ok(format!(
        "data:image/svg+xml;base64,{}",
        STANDARD.encode(image.as_bytes())
    ))
}

/// An encode requested by a click, run later off the click handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingEncode {
    target: String,
}

impl PendingEncode {
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn run(&self) -> Result<String> {
        encode_data_url(&self.target)
    }
}

/// State behind the "connect on WhatsApp" dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QrContact {
    is_open: bool,
    qr_code_url: String,
}

impl QrContact {
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn qr_code_url(&self) -> &str {
        &self.qr_code_url
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Click on the WhatsApp trigger.
    pub fn handle_click(&mut self) -> PendingEncode {
        self.request(WHATSAPP_URL)
    }

    /// Opens the dialog right away, whatever the encode later yields. The image only
    /// changes once the returned encode is run and fed to `accept_encoding`.
    pub fn request(&mut self, target: &str) -> PendingEncode {
        self.open();
        PendingEncode {
            target: target.to_string(),
        }
    }

    /// Applies the outcome of an encode. Failures keep whatever image was there before.
    pub fn accept_encoding(&mut self, res: Result<String>) {
        match res {
            Ok(url) => self.qr_code_url = url,
            Err(e) => log::error!("{e}"),
        }
    }
}
